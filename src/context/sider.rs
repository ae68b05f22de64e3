use super::use_ambient;

/// State a sider publishes to its contents
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiderContext {
    pub sider_collapsed: bool,
}

pub fn use_sider_context() -> SiderContext {
    use_ambient::<SiderContext>()
}
