use dioxus::prelude::*;

use crate::components::icons::{MenuFoldIcon, MenuUnfoldIcon};
use crate::context::{use_config, use_scoped_context, SiderContext};
use crate::utils::{px, ClassNames};

pub const SIDER_WIDTH: u32 = 200;
pub const SIDER_COLLAPSED_WIDTH: u32 = 80;

pub fn sider_width(collapsed: bool, width: u32, collapsed_width: u32) -> u32 {
    if collapsed {
        collapsed_width
    } else {
        width
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SiderProps {
    /// Controlled collapse state
    pub collapsed: Option<bool>,
    #[props(default = false)]
    pub default_collapsed: bool,
    /// Show the collapse trigger
    #[props(default = false)]
    pub collapsible: bool,
    #[props(default = SIDER_WIDTH)]
    pub width: u32,
    #[props(default = SIDER_COLLAPSED_WIDTH)]
    pub collapsed_width: u32,
    pub on_collapse: Option<EventHandler<bool>>,
    pub class: Option<String>,
    pub prefix_cls: Option<String>,
    pub children: Element,
}

/// Navigation rail that can collapse to icons only.
///
/// Publishes [`SiderContext`] so menus inside it know when their text is
/// hidden.
#[component]
pub fn Sider(props: SiderProps) -> Element {
    let config = use_config();
    let mut internal_collapsed = use_signal(|| props.default_collapsed);

    let collapsed = props.collapsed.unwrap_or_else(|| internal_collapsed());
    use_scoped_context(SiderContext {
        sider_collapsed: collapsed,
    });

    let prefix = config.prefix_for("layout-sider", props.prefix_cls.as_deref());
    let width = sider_width(collapsed, props.width, props.collapsed_width);
    let class = ClassNames::new()
        .with(prefix.clone())
        .with_if(collapsed, format!("{}-collapsed", prefix))
        .with_if(props.collapsible, format!("{}-has-trigger", prefix))
        .with_if(config.direction.is_rtl(), format!("{}-rtl", prefix))
        .with_opt(props.class.as_deref())
        .build();
    let width_px = px(width);
    let style = format!(
        "flex: 0 0 {w}; max-width: {w}; min-width: {w}; width: {w}",
        w = width_px
    );

    let on_collapse = props.on_collapse;

    rsx! {
        aside {
            class: "{class}",
            style: "{style}",
            div {
                class: "{prefix}-children",
                {props.children}
            }
            if props.collapsible {
                div {
                    class: "{prefix}-trigger",
                    style: "width: {width_px}",
                    role: "button",
                    onclick: move |_| {
                        let next = !collapsed;
                        internal_collapsed.set(next);
                        log::debug!("Sider collapsed: {}", next);
                        if let Some(handler) = on_collapse {
                            handler.call(next);
                        }
                    },
                    if collapsed {
                        MenuUnfoldIcon {}
                    } else {
                        MenuFoldIcon {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sider_width() {
        assert_eq!(sider_width(false, SIDER_WIDTH, SIDER_COLLAPSED_WIDTH), 200);
        assert_eq!(sider_width(true, SIDER_WIDTH, SIDER_COLLAPSED_WIDTH), 80);
        assert_eq!(sider_width(true, 240, 0), 0);
    }
}
