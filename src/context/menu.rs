use dioxus::prelude::*;

use super::{use_ambient, Direction};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuMode {
    #[default]
    Vertical,
    Inline,
    Horizontal,
}

impl MenuMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuMode::Vertical => "vertical",
            MenuMode::Inline => "inline",
            MenuMode::Horizontal => "horizontal",
        }
    }
}

/// State a menu publishes to its entries
#[derive(Clone, PartialEq)]
pub struct MenuContext {
    pub prefix_cls: String,
    pub mode: MenuMode,
    /// Entry has no ancestor entry
    pub first_level: bool,
    /// Host rail is collapsed to icons only
    pub inline_collapsed: bool,
    pub direction: Direction,
    pub disable_menu_item_title_tooltip: bool,
    /// Key of the selected entry
    pub selected_key: Option<String>,
    /// Reports the key of a clicked entry back to the menu
    pub on_item_click: Option<EventHandler<String>>,
}

impl Default for MenuContext {
    fn default() -> Self {
        Self {
            prefix_cls: "bk-menu".to_string(),
            mode: MenuMode::Vertical,
            first_level: true,
            inline_collapsed: false,
            direction: Direction::Ltr,
            disable_menu_item_title_tooltip: false,
            selected_key: None,
            on_item_click: None,
        }
    }
}

impl MenuContext {
    /// Context for entries nested one level deeper
    pub fn nested(&self) -> Self {
        Self {
            first_level: false,
            ..self.clone()
        }
    }

    pub fn is_selected(&self, key: Option<&str>) -> bool {
        matches!((key, self.selected_key.as_deref()), (Some(key), Some(selected)) if key == selected)
    }
}

pub fn use_menu_context() -> MenuContext {
    use_ambient::<MenuContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_clears_first_level() {
        let ctx = MenuContext {
            inline_collapsed: true,
            ..Default::default()
        };
        let nested = ctx.nested();
        assert!(!nested.first_level);
        assert!(nested.inline_collapsed);
        assert_eq!(nested.prefix_cls, ctx.prefix_cls);
    }

    #[test]
    fn test_is_selected() {
        let ctx = MenuContext {
            selected_key: Some("home".to_string()),
            ..Default::default()
        };
        assert!(ctx.is_selected(Some("home")));
        assert!(!ctx.is_selected(Some("settings")));
        assert!(!ctx.is_selected(None));
    }
}
