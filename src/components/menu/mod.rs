//! Navigation menu
//!
//! [`Menu`] publishes the ambient [`MenuContext`] its entries read;
//! [`SubMenu`] republishes it one level deeper.

use dioxus::prelude::*;

use crate::components::icons::ChevronDownIcon;
use crate::components::tooltip::Placement;
use crate::context::{use_config, use_menu_context, use_scoped_context, use_sider_context, MenuContext};
use crate::utils::ClassNames;

pub mod menu_item;

pub use crate::context::MenuMode;
pub use menu_item::{ItemTitle, MenuItem, MenuLabel};

/// Collapse only applies to inline menus; an enclosing collapsed sider
/// collapses them too.
pub fn effective_inline_collapsed(mode: MenuMode, inline_collapsed: bool, sider_collapsed: bool) -> bool {
    mode == MenuMode::Inline && (inline_collapsed || sider_collapsed)
}

#[derive(Props, Clone, PartialEq)]
pub struct MenuProps {
    #[props(default)]
    pub mode: MenuMode,
    #[props(default = false)]
    pub inline_collapsed: bool,
    /// Controlled selection
    pub selected_key: Option<String>,
    pub default_selected_key: Option<String>,
    pub on_select: Option<EventHandler<String>>,
    #[props(default = false)]
    pub disable_menu_item_title_tooltip: bool,
    pub class: Option<String>,
    pub style: Option<String>,
    pub prefix_cls: Option<String>,
    pub children: Element,
}

#[component]
pub fn Menu(props: MenuProps) -> Element {
    let config = use_config();
    let sider = use_sider_context();
    let mut internal_selected = use_signal(|| props.default_selected_key.clone());

    let on_select = props.on_select;
    let on_item_click = use_callback(move |key: String| {
        log::debug!("Menu item selected: {}", key);
        internal_selected.set(Some(key.clone()));
        if let Some(handler) = on_select {
            handler.call(key);
        }
    });

    let prefix = config.prefix_for("menu", props.prefix_cls.as_deref());
    let collapsed = effective_inline_collapsed(props.mode, props.inline_collapsed, sider.sider_collapsed);
    let selected_key = props.selected_key.clone().or_else(|| internal_selected());

    use_scoped_context(MenuContext {
        prefix_cls: prefix.clone(),
        mode: props.mode,
        first_level: true,
        inline_collapsed: collapsed,
        direction: config.direction,
        disable_menu_item_title_tooltip: props.disable_menu_item_title_tooltip,
        selected_key,
        on_item_click: Some(on_item_click),
    });

    let class = ClassNames::new()
        .with(prefix.clone())
        .with(format!("{}-root", prefix))
        .with(format!("{}-{}", prefix, props.mode.as_str()))
        .with_if(collapsed, format!("{}-inline-collapsed", prefix))
        .with_if(config.direction.is_rtl(), format!("{}-rtl", prefix))
        .with_opt(props.class.as_deref())
        .build();

    rsx! {
        ul {
            class: "{class}",
            style: props.style.clone(),
            role: "menu",
            dir: config.direction.as_str(),
            {props.children}
        }
    }
}

/// Where a submenu's children appear
pub fn submenu_popup(mode: MenuMode, inline_collapsed: bool) -> Option<Placement> {
    match mode {
        MenuMode::Inline if !inline_collapsed => None,
        MenuMode::Horizontal => Some(Placement::Bottom),
        _ => Some(Placement::Right),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SubMenuProps {
    pub title: String,
    pub icon: Option<Element>,
    pub item_key: Option<String>,
    #[props(default = false)]
    pub default_open: bool,
    #[props(default = false)]
    pub disabled: bool,
    pub class: Option<String>,
    pub children: Element,
}

/// Titled group of entries nested one level below its parent
#[component]
pub fn SubMenu(props: SubMenuProps) -> Element {
    let parent = use_menu_context();
    let mut open = use_signal(|| props.default_open);
    use_scoped_context(parent.nested());

    let prefix = parent.prefix_cls.clone();
    let title = props.title.clone();
    let popup = submenu_popup(parent.mode, parent.inline_collapsed);
    let disabled = props.disabled;

    let class = ClassNames::new()
        .with(format!("{}-submenu", prefix))
        .with(format!(
            "{}-submenu-{}",
            prefix,
            if popup.is_some() { "popup" } else { "inline" }
        ))
        .with_if(open(), format!("{}-submenu-open", prefix))
        .with_if(disabled, format!("{}-submenu-disabled", prefix))
        .with_opt(props.class.as_deref())
        .build();

    let sub_class = ClassNames::new()
        .with(prefix.clone())
        .with(format!("{}-sub", prefix))
        .with_opt(popup.map(|placement| format!("{}-sub-placement-{}", prefix, placement.as_str())).as_deref())
        .build();

    rsx! {
        li {
            class: "{class}",
            role: "none",
            onmouseenter: move |_| {
                if popup.is_some() && !disabled {
                    open.set(true);
                }
            },
            onmouseleave: move |_| {
                if popup.is_some() {
                    open.set(false);
                }
            },
            div {
                class: "{prefix}-submenu-title",
                role: "menuitem",
                aria_expanded: open(),
                aria_disabled: disabled,
                onclick: move |_| {
                    if popup.is_none() && !disabled {
                        let next = !open();
                        open.set(next);
                    }
                },
                if let Some(icon) = props.icon.clone() {
                    span { class: "{prefix}-item-icon", {icon} }
                }
                span { class: "{prefix}-title-content", "{title}" }
                ChevronDownIcon { class: format!("{}-submenu-arrow", prefix) }
            }
            if open() {
                ul {
                    class: "{sub_class}",
                    role: "menu",
                    {props.children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_collapse_only_for_inline_mode() {
        assert!(effective_inline_collapsed(MenuMode::Inline, true, false));
        assert!(effective_inline_collapsed(MenuMode::Inline, false, true));
        assert!(!effective_inline_collapsed(MenuMode::Inline, false, false));
        assert!(!effective_inline_collapsed(MenuMode::Vertical, true, true));
        assert!(!effective_inline_collapsed(MenuMode::Horizontal, true, false));
    }

    #[test]
    fn test_submenu_popup_placement() {
        assert_eq!(submenu_popup(MenuMode::Inline, false), None);
        assert_eq!(submenu_popup(MenuMode::Inline, true), Some(Placement::Right));
        assert_eq!(submenu_popup(MenuMode::Vertical, false), Some(Placement::Right));
        assert_eq!(submenu_popup(MenuMode::Horizontal, false), Some(Placement::Bottom));
    }

    #[test]
    fn test_collapsed_item_renders_initial_directly_in_list() {
        fn app() -> Element {
            rsx! {
                Menu {
                    mode: MenuMode::Inline,
                    inline_collapsed: true,
                    MenuItem { label: "Dashboard" }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("<div class=\"bk-menu-inline-collapsed-noicon\">D</div>"));
        assert!(html.contains("bk-menu-item bk-menu-item-only-child"));
        assert!(!html.contains("tooltip-anchor"));
        // Entries are direct children of the list
        let list_open = html.find('>').unwrap_or(0);
        assert!(html.starts_with("<ul"));
        assert!(html[list_open + 1..].starts_with("<li"));
    }

    #[test]
    fn test_expanded_item_renders_full_label() {
        fn app() -> Element {
            rsx! {
                Menu {
                    MenuItem { label: "Dashboard", danger: true }
                }
            }
        }
        let html = render(app);
        assert!(html.contains("<span class=\"bk-menu-title-content\">Dashboard</span>"));
        assert!(html.contains("bk-menu-item-danger"));
        assert!(!html.contains("role=\"tooltip\""));
    }
}
