use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use super::{use_ambient, use_scoped_context};

pub const DEFAULT_PREFIX_CLS: &str = "bk";
pub const DEFAULT_ICON_PREFIX_CLS: &str = "bkicon";

/// Text direction of a subtree
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "rtl" => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

/// Namespaces and direction shared by every component in a subtree
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigContext {
    pub prefix_cls: String,
    pub icon_prefix_cls: String,
    pub direction: Direction,
}

impl Default for ConfigContext {
    fn default() -> Self {
        Self {
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
            icon_prefix_cls: DEFAULT_ICON_PREFIX_CLS.to_string(),
            direction: Direction::Ltr,
        }
    }
}

impl ConfigContext {
    /// Class prefix for a component.
    ///
    /// A caller-supplied prefix wins; otherwise `{prefix_cls}-{suffix}`, or
    /// the bare root prefix when `suffix` is empty.
    pub fn prefix_for(&self, suffix: &str, custom: Option<&str>) -> String {
        if let Some(custom) = custom {
            return custom.to_string();
        }
        if suffix.is_empty() {
            self.prefix_cls.clone()
        } else {
            format!("{}-{}", self.prefix_cls, suffix)
        }
    }
}

/// Read the nearest configuration
pub fn use_config() -> ConfigContext {
    use_ambient::<ConfigContext>()
}

/// Publishes prefix namespaces and text direction to its subtree.
///
/// Unset props inherit from the enclosing provider.
#[component]
pub fn ConfigProvider(
    prefix_cls: Option<String>,
    icon_prefix_cls: Option<String>,
    direction: Option<Direction>,
    children: Element,
) -> Element {
    let parent = use_config();

    use_scoped_context(ConfigContext {
        prefix_cls: prefix_cls.unwrap_or(parent.prefix_cls),
        icon_prefix_cls: icon_prefix_cls.unwrap_or(parent.icon_prefix_cls),
        direction: direction.unwrap_or(parent.direction),
    });

    rsx! {
        {children}
    }
}
