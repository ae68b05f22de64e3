use dioxus::prelude::*;

use crate::components::tooltip::{overlay_visible, Placement, TooltipOverlay};
use crate::context::{use_menu_context, use_sider_context, Direction};
use crate::utils::{first_char, ClassNames};

/// Children of a menu entry
#[derive(Clone, PartialEq)]
pub enum MenuLabel {
    Empty,
    /// Plain text
    Text(String),
    /// Content the caller already wrapped in an inline `span`
    Inline(Element),
    /// Arbitrary rich content
    Nodes(Vec<Element>),
}

impl Default for MenuLabel {
    fn default() -> Self {
        MenuLabel::Empty
    }
}

impl From<&str> for MenuLabel {
    fn from(text: &str) -> Self {
        MenuLabel::Text(text.to_string())
    }
}

impl From<String> for MenuLabel {
    fn from(text: String) -> Self {
        MenuLabel::Text(text)
    }
}

impl MenuLabel {
    /// Number of child nodes the label contributes
    pub fn len(&self) -> usize {
        match self {
            MenuLabel::Empty => 0,
            MenuLabel::Text(_) | MenuLabel::Inline(_) => 1,
            MenuLabel::Nodes(nodes) => nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nothing visible would be rendered
    pub fn is_blank(&self) -> bool {
        match self {
            MenuLabel::Text(text) => text.is_empty(),
            other => other.is_empty(),
        }
    }

    pub fn render(&self) -> Element {
        match self {
            MenuLabel::Empty => rsx! {},
            MenuLabel::Text(text) => rsx! { "{text}" },
            MenuLabel::Inline(node) => node.clone(),
            MenuLabel::Nodes(nodes) => rsx! {
                for node in nodes.iter().cloned() {
                    {node}
                }
            },
        }
    }
}

/// Explicit tooltip title of an entry. `None` at the prop level means unset.
#[derive(Clone, PartialEq)]
pub enum ItemTitle {
    /// Title explicitly turned off
    Hidden,
    Text(String),
    Rich(Element),
}

/// What the entry body shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayedContent {
    /// Collapsed first-level text entry without icon: first character only
    CollapsedInitial(String),
    /// Children wrapped in the title-content span
    Full,
}

pub fn displayed_content(
    label: &MenuLabel,
    has_icon: bool,
    first_level: bool,
    inline_collapsed: bool,
) -> DisplayedContent {
    let inline_wrapped = matches!(label, MenuLabel::Inline(_));
    if !has_icon || inline_wrapped {
        if let MenuLabel::Text(text) = label {
            if !text.is_empty() && inline_collapsed && first_level {
                return DisplayedContent::CollapsedInitial(first_char(text));
            }
        }
    }
    DisplayedContent::Full
}

/// Resolved tooltip settings for an entry
#[derive(Clone, PartialEq)]
pub struct TooltipState {
    /// `None` renders no overlay
    pub title: Option<MenuLabel>,
    /// Controlled visibility, `None` follows hover
    pub open: Option<bool>,
}

pub fn tooltip_state(
    title: Option<&ItemTitle>,
    label: &MenuLabel,
    first_level: bool,
    sider_collapsed: bool,
    inline_collapsed: bool,
) -> TooltipState {
    // Text is only hidden while collapsed, so that is the only time the
    // tooltip has something to add
    if !sider_collapsed && !inline_collapsed {
        return TooltipState {
            title: None,
            open: Some(false),
        };
    }

    let title = match title {
        None if first_level => Some(label.clone()),
        None => None,
        Some(ItemTitle::Hidden) => None,
        Some(ItemTitle::Text(text)) => Some(MenuLabel::Text(text.clone())),
        Some(ItemTitle::Rich(node)) => Some(MenuLabel::Inline(node.clone())),
    };

    TooltipState {
        title: title.filter(|title| !title.is_blank()),
        open: None,
    }
}

/// An icon counts as one extra child
pub fn is_only_child(children_len: usize, has_icon: bool) -> bool {
    let count = if has_icon { children_len + 1 } else { children_len };
    count == 1
}

pub fn tooltip_placement(direction: Direction) -> Placement {
    if direction.is_rtl() {
        Placement::Left
    } else {
        Placement::Right
    }
}

pub struct ItemClassState<'a> {
    pub danger: bool,
    pub only_child: bool,
    pub selected: bool,
    pub disabled: bool,
    pub class: Option<&'a str>,
}

pub fn item_class(prefix: &str, state: ItemClassState<'_>) -> String {
    ClassNames::new()
        .with(format!("{}-item", prefix))
        .with_if(state.selected, format!("{}-item-selected", prefix))
        .with_if(state.disabled, format!("{}-item-disabled", prefix))
        .with_if(state.danger, format!("{}-item-danger", prefix))
        .with_if(state.only_child, format!("{}-item-only-child", prefix))
        .with_opt(state.class)
        .build()
}

#[derive(Props, Clone, PartialEq)]
pub struct MenuItemProps {
    /// Children of the entry
    #[props(into)]
    pub label: MenuLabel,
    pub icon: Option<Element>,
    pub title: Option<ItemTitle>,
    #[props(default = false)]
    pub danger: bool,
    #[props(default = false)]
    pub disabled: bool,
    pub item_key: Option<String>,
    pub on_click: Option<EventHandler<String>>,
    pub class: Option<String>,
    pub style: Option<String>,
}

/// A selectable navigation entry.
///
/// Reads [`MenuContext`](crate::context::MenuContext) and
/// [`SiderContext`](crate::context::SiderContext); collapsed entries get a
/// tooltip carrying the hidden text, rendered inside the entry itself.
#[component]
pub fn MenuItem(props: MenuItemProps) -> Element {
    let menu = use_menu_context();
    let sider = use_sider_context();
    let mut hovered = use_signal(|| false);
    let prefix = menu.prefix_cls.clone();

    let has_icon = props.icon.is_some();
    let tooltip = tooltip_state(
        props.title.as_ref(),
        &props.label,
        menu.first_level,
        sider.sider_collapsed,
        menu.inline_collapsed,
    );
    let displayed = displayed_content(&props.label, has_icon, menu.first_level, menu.inline_collapsed);

    let class = item_class(
        &prefix,
        ItemClassState {
            danger: props.danger,
            only_child: is_only_child(props.label.len(), has_icon),
            selected: menu.is_selected(props.item_key.as_deref()),
            disabled: props.disabled,
            class: props.class.as_deref(),
        },
    );

    let native_title = match &props.title {
        Some(ItemTitle::Text(text)) => Some(text.clone()),
        _ => None,
    };

    let disabled = props.disabled;
    let item_key = props.item_key.clone().unwrap_or_default();
    let on_click = props.on_click;
    let on_item_click = menu.on_item_click;

    let tooltips = !menu.disable_menu_item_title_tooltip;
    let show_overlay = tooltips && overlay_visible(tooltip.title.is_some(), tooltip.open, hovered());
    let overlay = tooltip.title.filter(|_| show_overlay).map(|title| title.render());
    let placement = tooltip_placement(menu.direction);
    let overlay_class = format!("{}-inline-collapsed-tooltip", prefix);

    rsx! {
        li {
            class: "{class}",
            style: props.style.clone(),
            role: "menuitem",
            title: native_title,
            tabindex: if disabled { None } else { Some("-1") },
            aria_disabled: disabled,
            onmouseenter: move |_| {
                if tooltips {
                    hovered.set(true);
                }
            },
            onmouseleave: move |_| hovered.set(false),
            onfocusin: move |_| {
                if tooltips {
                    hovered.set(true);
                }
            },
            onfocusout: move |_| hovered.set(false),
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = on_click {
                    handler.call(item_key.clone());
                }
                if let Some(handler) = on_item_click {
                    handler.call(item_key.clone());
                }
            },
            if let Some(icon) = props.icon.clone() {
                span { class: "{prefix}-item-icon", {icon} }
            }
            match displayed {
                DisplayedContent::CollapsedInitial(initial) => rsx! {
                    div { class: "{prefix}-inline-collapsed-noicon", "{initial}" }
                },
                DisplayedContent::Full => rsx! {
                    span { class: "{prefix}-title-content", {props.label.render()} }
                },
            }
            if let Some(title) = overlay {
                TooltipOverlay {
                    title,
                    placement,
                    overlay_class_name: overlay_class,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(state: &TooltipState) -> Option<String> {
        match &state.title {
            Some(MenuLabel::Text(text)) => Some(text.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_collapsed_first_level_text_shows_initial() {
        let label = MenuLabel::from("Dashboard");
        assert_eq!(
            displayed_content(&label, false, true, true),
            DisplayedContent::CollapsedInitial("D".to_string())
        );
    }

    #[test]
    fn test_full_content_when_not_collapsed_or_nested() {
        let label = MenuLabel::from("Dashboard");
        assert_eq!(displayed_content(&label, false, true, false), DisplayedContent::Full);
        assert_eq!(displayed_content(&label, false, false, true), DisplayedContent::Full);
    }

    #[test]
    fn test_icon_keeps_full_text() {
        let label = MenuLabel::from("Dashboard");
        assert_eq!(displayed_content(&label, true, true, true), DisplayedContent::Full);
    }

    #[test]
    fn test_empty_text_never_collapses() {
        let label = MenuLabel::from("");
        assert_eq!(displayed_content(&label, false, true, true), DisplayedContent::Full);
        assert_eq!(displayed_content(&MenuLabel::Empty, false, true, true), DisplayedContent::Full);
    }

    #[test]
    fn test_tooltip_forced_off_when_expanded() {
        let label = MenuLabel::from("Dashboard");
        let title = ItemTitle::Text("Explicit".to_string());
        let state = tooltip_state(Some(&title), &label, true, false, false);
        assert!(state.title.is_none());
        assert_eq!(state.open, Some(false));

        let state = tooltip_state(None, &label, true, false, false);
        assert!(state.title.is_none());
        assert_eq!(state.open, Some(false));
    }

    #[test]
    fn test_tooltip_defaults_to_children_for_first_level() {
        let label = MenuLabel::from("Dashboard");
        let state = tooltip_state(None, &label, true, false, true);
        assert_eq!(text_of(&state), Some("Dashboard".to_string()));
        assert_eq!(state.open, None);

        // Sider collapse alone also keeps the tooltip
        let state = tooltip_state(None, &label, true, true, false);
        assert_eq!(text_of(&state), Some("Dashboard".to_string()));
    }

    #[test]
    fn test_tooltip_empty_for_nested_without_title() {
        let label = MenuLabel::from("Dashboard");
        let state = tooltip_state(None, &label, false, true, true);
        assert!(state.title.is_none());
    }

    #[test]
    fn test_hidden_title_suppresses_tooltip() {
        let label = MenuLabel::from("Dashboard");
        let state = tooltip_state(Some(&ItemTitle::Hidden), &label, true, true, true);
        assert!(state.title.is_none());
        assert_eq!(state.open, None);
    }

    #[test]
    fn test_explicit_title_wins() {
        let label = MenuLabel::from("Dashboard");
        let title = ItemTitle::Text("Overview".to_string());
        let state = tooltip_state(Some(&title), &label, false, true, true);
        assert_eq!(text_of(&state), Some("Overview".to_string()));
    }

    #[test]
    fn test_only_child_arithmetic() {
        assert!(is_only_child(1, false));
        assert!(is_only_child(0, true));
        assert!(!is_only_child(1, true));
        assert!(!is_only_child(0, false));
        assert!(!is_only_child(2, false));
    }

    #[test]
    fn test_label_len() {
        assert_eq!(MenuLabel::Empty.len(), 0);
        assert_eq!(MenuLabel::from("x").len(), 1);
        assert_eq!(MenuLabel::Nodes(vec![]).len(), 0);
    }

    #[test]
    fn test_placement_flips_with_direction() {
        assert_eq!(tooltip_placement(Direction::Ltr), Placement::Right);
        assert_eq!(tooltip_placement(Direction::Rtl), Placement::Left);
    }

    #[test]
    fn test_item_class() {
        let class = item_class(
            "bk-menu",
            ItemClassState {
                danger: true,
                only_child: true,
                selected: false,
                disabled: false,
                class: Some("nav"),
            },
        );
        assert_eq!(class, "bk-menu-item bk-menu-item-danger bk-menu-item-only-child nav");
    }
}
