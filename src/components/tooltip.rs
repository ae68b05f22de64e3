use dioxus::prelude::*;

use crate::context::use_config;
use crate::utils::ClassNames;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TooltipProps {
    /// Overlay content. `None` renders the children alone.
    pub title: Option<Element>,
    /// Controlled visibility. `Some(false)` keeps the overlay closed.
    pub open: Option<bool>,
    #[props(default)]
    pub placement: Placement,
    pub overlay_class_name: Option<String>,
    pub prefix_cls: Option<String>,
    pub children: Element,
}

/// Whether the overlay is shown given controlled and hover state
pub fn overlay_visible(has_title: bool, open: Option<bool>, hovered: bool) -> bool {
    has_title && open.unwrap_or(hovered)
}

/// Tooltip bubble on its own, for anchors that manage their own hover state
#[component]
pub fn TooltipOverlay(
    title: Element,
    #[props(default)] placement: Placement,
    overlay_class_name: Option<String>,
    prefix_cls: Option<String>,
) -> Element {
    let config = use_config();
    let prefix = config.prefix_for("tooltip", prefix_cls.as_deref());

    let overlay_class = ClassNames::new()
        .with(prefix.clone())
        .with(format!("{}-placement-{}", prefix, placement.as_str()))
        .with_if(config.direction.is_rtl(), format!("{}-rtl", prefix))
        .with_opt(overlay_class_name.as_deref())
        .build();

    rsx! {
        div {
            class: "{overlay_class}",
            role: "tooltip",
            div { class: "{prefix}-arrow" }
            div {
                class: "{prefix}-inner",
                {title}
            }
        }
    }
}

#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let config = use_config();
    let mut hovered = use_signal(|| false);

    let prefix = config.prefix_for("tooltip", props.prefix_cls.as_deref());
    let visible = overlay_visible(props.title.is_some(), props.open, hovered());

    rsx! {
        span {
            class: "{prefix}-anchor",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            onfocusin: move |_| hovered.set(true),
            onfocusout: move |_| hovered.set(false),

            {props.children}

            if visible {
                if let Some(title) = props.title.clone() {
                    TooltipOverlay {
                        title,
                        placement: props.placement,
                        overlay_class_name: props.overlay_class_name.clone(),
                        prefix_cls: props.prefix_cls.clone(),
                    }
                }
            }
        }
    }
}
