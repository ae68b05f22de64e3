//! Modal dialog primitive and the confirmation composer built on it

use dioxus::prelude::*;

use crate::components::icons::CloseIcon;
use crate::context::use_config;
use crate::utils::{transition_name, ClassNames};

pub mod confirm_dialog;

pub use confirm_dialog::{
    AutoFocusButton, ClosePayload, ConfirmDialog, ConfirmDialogProps, ConfirmKind, DialogIcon, DialogSize,
};

pub const DEFAULT_MODAL_WIDTH: u32 = 520;

/// Change in open state between two renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpenTransition {
    Opened,
    Closed,
    Unchanged,
}

pub fn open_transition(was_open: bool, open: bool) -> OpenTransition {
    match (was_open, open) {
        (false, true) => OpenTransition::Opened,
        (true, false) => OpenTransition::Closed,
        _ => OpenTransition::Unchanged,
    }
}

pub fn wrap_class(prefix: &str, centered: bool, wrap_class_name: Option<&str>) -> String {
    ClassNames::new()
        .with(format!("{}-wrap", prefix))
        .with_if(centered, format!("{}-centered", prefix))
        .with_opt(wrap_class_name)
        .build()
}

pub fn dialog_style(width: u32, style: Option<&str>) -> String {
    match style.map(str::trim).filter(|s| !s.is_empty()) {
        Some(style) => format!("width: {}px; {}", width, style),
        None => format!("width: {}px", width),
    }
}

/// Element that had focus before the dialog opened
#[derive(Default)]
struct FocusTrigger {
    #[cfg(target_arch = "wasm32")]
    element: Option<web_sys::HtmlElement>,
}

impl FocusTrigger {
    fn capture(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            self.element = web_sys::window()
                .and_then(|win| win.document())
                .and_then(|doc| doc.active_element())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        }
    }

    fn restore(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(element) = self.element.take() {
                if let Err(e) = element.focus() {
                    log::warn!("Failed to restore focus after dialog close: {:?}", e);
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    #[props(default = false)]
    pub open: bool,
    pub title: Option<Element>,
    /// `None` renders no footer
    pub footer: Option<Element>,
    pub on_cancel: Option<EventHandler<()>>,
    /// Fires once after each close
    pub after_close: Option<EventHandler<()>>,
    #[props(default = DEFAULT_MODAL_WIDTH)]
    pub width: u32,
    pub z_index: Option<i32>,
    #[props(default = true)]
    pub mask: bool,
    #[props(default = true)]
    pub mask_closable: bool,
    pub mask_style: Option<String>,
    #[props(default = true)]
    pub keyboard: bool,
    #[props(default = false)]
    pub centered: bool,
    #[props(default = true)]
    pub closable: bool,
    pub close_icon: Option<Element>,
    #[props(default = true)]
    pub focus_trigger_after_close: bool,
    pub class: Option<String>,
    pub wrap_class_name: Option<String>,
    pub style: Option<String>,
    pub body_style: Option<String>,
    pub transition_name: Option<String>,
    pub mask_transition_name: Option<String>,
    /// Wraps the dialog box, e.g. to make it draggable
    pub modal_render: Option<Callback<Element, Element>>,
    pub prefix_cls: Option<String>,
    pub children: Element,
}

/// Dialog with a backdrop. Renders nothing while closed.
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let config = use_config();
    let mut was_open = use_signal(|| false);
    let mut focus_trigger = use_signal(FocusTrigger::default);

    let open = props.open;
    let after_close = props.after_close;
    let restore_focus = props.focus_trigger_after_close;
    use_effect(use_reactive(
        (&open, &after_close, &restore_focus),
        move |(open, after_close, restore_focus)| {
            match open_transition(*was_open.peek(), open) {
                OpenTransition::Opened => {
                    focus_trigger.write().capture();
                }
                OpenTransition::Closed => {
                    if restore_focus {
                        focus_trigger.write().restore();
                    }
                    if let Some(handler) = after_close {
                        handler.call(());
                    }
                }
                OpenTransition::Unchanged => {}
            }
            if *was_open.peek() != open {
                was_open.set(open);
            }
        },
    ));

    if !open {
        return rsx! {};
    }

    let prefix = config.prefix_for("modal", props.prefix_cls.as_deref());
    let zoom = transition_name(&config.prefix_cls, "zoom", props.transition_name.as_deref());
    let fade = transition_name(&config.prefix_cls, "fade", props.mask_transition_name.as_deref());

    let root_class = ClassNames::new()
        .with(format!("{}-root", prefix))
        .with_if(config.direction.is_rtl(), format!("{}-rtl", prefix))
        .build();
    let mask_class = ClassNames::new().with(format!("{}-mask", prefix)).with(fade).build();
    let modal_class = ClassNames::new()
        .with(prefix.clone())
        .with(zoom)
        .with_opt(props.class.as_deref())
        .build();
    let wrap = wrap_class(&prefix, props.centered, props.wrap_class_name.as_deref());
    let wrap_style = props.z_index.map(|z| format!("z-index: {}", z));
    let style = dialog_style(props.width, props.style.as_deref());

    let on_cancel = props.on_cancel;
    let cancel = move || {
        if let Some(handler) = on_cancel {
            handler.call(());
        }
    };
    let show_mask = props.mask;
    let mask_closable = props.mask && props.mask_closable;
    let keyboard = props.keyboard;
    let mask_style = props.mask_style.clone();
    let modal_render = props.modal_render;

    let panel = rsx! {
        div {
            class: "{modal_class}",
            style: "{style}",
            role: "dialog",
            aria_modal: "true",
            onclick: move |e| e.stop_propagation(),
            div {
                class: "{prefix}-content",
                if props.closable {
                    button {
                        class: "{prefix}-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| cancel(),
                        span {
                            class: "{prefix}-close-x",
                            if let Some(icon) = props.close_icon.clone() {
                                {icon}
                            } else {
                                CloseIcon { class: format!("{}-close-icon", prefix) }
                            }
                        }
                    }
                }
                if let Some(title) = props.title.clone() {
                    div {
                        class: "{prefix}-header",
                        div { class: "{prefix}-title", {title} }
                    }
                }
                div {
                    class: "{prefix}-body",
                    style: props.body_style.clone(),
                    {props.children}
                }
                if let Some(footer) = props.footer.clone() {
                    div { class: "{prefix}-footer", {footer} }
                }
            }
        }
    };
    let panel = match modal_render {
        Some(render) => render.call(panel),
        None => panel,
    };

    rsx! {
        div {
            class: "{root_class}",
            if show_mask {
                div {
                    class: "{mask_class}",
                    style: mask_style,
                }
            }
            div {
                class: "{wrap}",
                style: wrap_style,
                tabindex: "-1",
                onclick: move |_| {
                    if mask_closable {
                        cancel();
                    }
                },
                onkeydown: move |evt: KeyboardEvent| {
                    if keyboard && evt.key() == Key::Escape {
                        evt.stop_propagation();
                        cancel();
                    }
                },
                {panel}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_transition() {
        assert_eq!(open_transition(false, true), OpenTransition::Opened);
        assert_eq!(open_transition(true, false), OpenTransition::Closed);
        assert_eq!(open_transition(true, true), OpenTransition::Unchanged);
        assert_eq!(open_transition(false, false), OpenTransition::Unchanged);
    }

    #[test]
    fn test_wrap_class() {
        assert_eq!(wrap_class("bk-modal", false, None), "bk-modal-wrap");
        assert_eq!(
            wrap_class("bk-modal", true, Some("bk-modal-confirm-centered")),
            "bk-modal-wrap bk-modal-centered bk-modal-confirm-centered"
        );
    }

    #[test]
    fn test_dialog_style() {
        assert_eq!(dialog_style(400, None), "width: 400px");
        assert_eq!(dialog_style(600, Some(" top: 20px ")), "width: 600px; top: 20px");
        assert_eq!(dialog_style(600, Some("")), "width: 600px");
    }
}
