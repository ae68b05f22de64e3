use dioxus::prelude::*;

use super::Modal;
use crate::components::button::{ActionButton, ButtonOptions, ButtonType};
use crate::context::{use_config, ConfigProvider, Direction};
use crate::utils::{warning, ClassNames};

/// Sizing keyword for confirmation dialogs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogSize {
    Small,
    Medium,
    Large,
}

impl DialogSize {
    /// Unknown keywords resolve to no size, which renders the default width
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "small" => Some(DialogSize::Small),
            "medium" => Some(DialogSize::Medium),
            "large" => Some(DialogSize::Large),
            _ => None,
        }
    }
}

pub const CONFIRM_WIDTH: u32 = 400;
pub const CONFIRM_WIDTH_MEDIUM: u32 = 600;
pub const CONFIRM_WIDTH_LARGE: u32 = 900;

/// An explicit positive width wins over the sizing keyword.
pub fn dialog_width(width: Option<u32>, size: Option<DialogSize>) -> u32 {
    if let Some(width) = width.filter(|w| *w > 0) {
        return width;
    }
    match size {
        Some(DialogSize::Medium) => CONFIRM_WIDTH_MEDIUM,
        Some(DialogSize::Large) => CONFIRM_WIDTH_LARGE,
        _ => CONFIRM_WIDTH,
    }
}

/// `open` takes precedence over the deprecated `visible`
pub fn effective_open(open: Option<bool>, visible: Option<bool>) -> bool {
    open.or(visible).unwrap_or(false)
}

/// Button focused when the dialog mounts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoFocusButton {
    Ok,
    Cancel,
    /// Disable autofocus
    Off,
}

/// Unset focuses ok; `Off` disables autofocus
pub fn resolve_auto_focus(auto_focus_button: Option<AutoFocusButton>) -> Option<AutoFocusButton> {
    match auto_focus_button {
        None => Some(AutoFocusButton::Ok),
        Some(AutoFocusButton::Off) => None,
        Some(other) => Some(other),
    }
}

/// Flavor of a confirmation dialog
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmKind {
    #[default]
    Confirm,
    Info,
    Success,
    Error,
    Warning,
}

impl ConfirmKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmKind::Confirm => "confirm",
            ConfirmKind::Info => "info",
            ConfirmKind::Success => "success",
            ConfirmKind::Error => "error",
            ConfirmKind::Warning => "warning",
        }
    }
}

/// Icon shown before the title
#[derive(Clone, PartialEq)]
pub enum DialogIcon {
    Node(Element),
    /// Icon referenced by name, the pre-element API
    Named(String),
}

/// A named icon longer than two characters is almost certainly an old
/// icon name rather than a glyph.
pub fn icon_name_misused(icon: Option<&DialogIcon>) -> bool {
    matches!(icon, Some(DialogIcon::Named(name)) if name.chars().count() > 2)
}

/// Result reported through `close`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClosePayload {
    /// Closed through a cancel path rather than ok
    pub trigger_cancel: bool,
}

impl ClosePayload {
    pub fn confirmed() -> Self {
        Self { trigger_cancel: false }
    }

    pub fn cancelled() -> Self {
        Self { trigger_cancel: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    Ok,
    Cancel,
}

impl ConfirmAction {
    pub fn payload(self) -> ClosePayload {
        match self {
            ConfirmAction::Ok => ClosePayload::confirmed(),
            ConfirmAction::Cancel => ClosePayload::cancelled(),
        }
    }
}

/// Tracks whether a dialog instance already resolved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    settled: bool,
}

impl Settlement {
    /// True the first time only
    pub fn settle(&mut self) -> bool {
        !std::mem::replace(&mut self.settled, true)
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// Run the action's handler, then report the close.
pub fn run_action(action: ConfirmAction, mut handler: impl FnMut(), mut close: impl FnMut(ClosePayload)) {
    handler();
    close(action.payload());
}

/// Root and modal class prefixes. The modal prefix derives from the root
/// prefix unless given explicitly.
pub fn confirm_prefixes(
    prefix_cls: Option<&str>,
    root_prefix_cls: Option<&str>,
    inherited_root: &str,
) -> (String, String) {
    let root = root_prefix_cls.unwrap_or(inherited_root).to_string();
    let prefix = prefix_cls
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}-modal", root));
    (root, prefix)
}

/// Boolean options after applying defaults
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogSwitches {
    pub ok_cancel: bool,
    pub mask: bool,
    pub mask_closable: bool,
    pub keyboard: bool,
    pub centered: bool,
    pub closable: bool,
    pub focus_trigger_after_close: bool,
}

impl Default for DialogSwitches {
    fn default() -> Self {
        Self {
            ok_cancel: true,
            mask: true,
            mask_closable: false,
            keyboard: true,
            centered: false,
            closable: true,
            focus_trigger_after_close: true,
        }
    }
}

impl DialogSwitches {
    pub fn from_props(props: &ConfirmDialogProps) -> Self {
        let defaults = Self::default();
        Self {
            ok_cancel: props.ok_cancel.unwrap_or(defaults.ok_cancel),
            mask: props.mask.unwrap_or(defaults.mask),
            mask_closable: props.mask_closable.unwrap_or(defaults.mask_closable),
            keyboard: props.keyboard.unwrap_or(defaults.keyboard),
            centered: props.centered.unwrap_or(defaults.centered),
            closable: props.closable.unwrap_or(defaults.closable),
            focus_trigger_after_close: props
                .focus_trigger_after_close
                .unwrap_or(defaults.focus_trigger_after_close),
        }
    }
}

pub fn confirm_class(
    prefix: &str,
    kind: ConfirmKind,
    direction: Direction,
    class: Option<&str>,
) -> String {
    let content_prefix = format!("{}-confirm", prefix);
    ClassNames::new()
        .with(content_prefix.clone())
        .with(format!("{}-{}", content_prefix, kind.as_str()))
        .with_if(direction.is_rtl(), format!("{}-rtl", content_prefix))
        .with_opt(class)
        .build()
}

#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub icon: Option<DialogIcon>,
    pub title: Option<Element>,
    pub content: Option<Element>,
    /// Replaces the ok/cancel buttons
    pub footer: Option<Element>,
    #[props(default)]
    pub kind: ConfirmKind,

    pub on_ok: Option<EventHandler<()>>,
    pub on_cancel: Option<EventHandler<()>>,
    /// Reports how the dialog resolved
    pub close: EventHandler<ClosePayload>,
    pub after_close: Option<EventHandler<()>>,

    pub open: Option<bool>,
    /// Deprecated alias of `open`
    pub visible: Option<bool>,

    pub ok_text: Option<String>,
    pub ok_type: Option<ButtonType>,
    #[props(default)]
    pub ok_button_props: ButtonOptions,
    pub cancel_text: Option<String>,
    #[props(default)]
    pub cancel_button_props: ButtonOptions,
    /// Show the cancel button; unset means true
    pub ok_cancel: Option<bool>,
    /// `Some(AutoFocusButton::Off)` disables autofocus
    pub auto_focus_button: Option<AutoFocusButton>,

    pub width: Option<u32>,
    pub size: Option<DialogSize>,
    pub z_index: Option<i32>,
    pub mask: Option<bool>,
    pub mask_closable: Option<bool>,
    pub mask_style: Option<String>,
    pub keyboard: Option<bool>,
    pub centered: Option<bool>,
    pub closable: Option<bool>,
    pub close_icon: Option<Element>,
    pub focus_trigger_after_close: Option<bool>,

    pub class: Option<String>,
    pub wrap_class_name: Option<String>,
    pub style: Option<String>,
    pub body_style: Option<String>,
    pub transition_name: Option<String>,
    pub mask_transition_name: Option<String>,
    /// Wraps the rendered dialog box
    pub modal_render: Option<Callback<Element, Element>>,

    pub direction: Option<Direction>,
    pub prefix_cls: Option<String>,
    pub root_prefix_cls: Option<String>,
    pub icon_prefix_cls: Option<String>,
}

/// Modal with a title row, body and ok/cancel actions.
///
/// Every activation path resolves through `close` at most once per opening.
/// Cancel paths (cancel button, close icon, mask, Escape) call `on_cancel`
/// then `close` with `trigger_cancel` set; ok calls `on_ok` then `close`.
#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    let config = use_config();
    let mut settlement = use_signal(Settlement::default);

    if let Some(DialogIcon::Named(name)) = &props.icon {
        warning(
            !icon_name_misused(props.icon.as_ref()),
            "Modal",
            &format!("`icon` takes an element instead of an icon name. Please check `{}`", name),
        );
    }
    warning(
        props.visible.is_none(),
        "Modal",
        "`visible` is deprecated, please use `open` instead.",
    );

    let open = effective_open(props.open, props.visible);
    use_effect(use_reactive(&open, move |open| {
        if open && settlement.peek().is_settled() {
            settlement.set(Settlement::default());
        }
    }));

    let on_ok = props.on_ok;
    let on_cancel = props.on_cancel;
    let close = props.close;
    let finish = use_callback(move |action: ConfirmAction| {
        if !settlement.write().settle() {
            log::debug!("Ignoring {:?}, dialog already resolved", action);
            return;
        }
        let handler = match action {
            ConfirmAction::Ok => on_ok,
            ConfirmAction::Cancel => on_cancel,
        };
        run_action(
            action,
            || {
                if let Some(handler) = handler {
                    handler.call(());
                }
            },
            |payload| close.call(payload),
        );
    });

    let (root_prefix, prefix) = confirm_prefixes(
        props.prefix_cls.as_deref(),
        props.root_prefix_cls.as_deref(),
        &config.prefix_cls,
    );
    let direction = props.direction.unwrap_or(config.direction);
    let content_prefix = format!("{}-confirm", prefix);
    let btn_prefix = format!("{}-btn", root_prefix);

    let ok_type = props.ok_type.unwrap_or(ButtonType::Primary);
    let switches = DialogSwitches::from_props(&props);
    let ok_cancel = switches.ok_cancel;
    let width = dialog_width(props.width, props.size);
    let auto_focus = resolve_auto_focus(props.auto_focus_button);

    let class = confirm_class(&prefix, props.kind, direction, props.class.as_deref());
    let wrap_class = ClassNames::new()
        .with_if(switches.centered, format!("{}-centered", content_prefix))
        .with_opt(props.wrap_class_name.as_deref())
        .build();

    let ok_text = props.ok_text.clone().unwrap_or_else(|| "OK".to_string());
    let cancel_text = props.cancel_text.clone().unwrap_or_else(|| "Cancel".to_string());
    let icon_prefix = props
        .icon_prefix_cls
        .clone()
        .unwrap_or_else(|| config.icon_prefix_cls.clone());

    let icon = match props.icon.clone() {
        Some(DialogIcon::Node(node)) => Some(node),
        Some(DialogIcon::Named(name)) => Some(rsx! {
            span { class: "{icon_prefix} {icon_prefix}-{name}", role: "img", aria_label: "{name}" }
        }),
        None => None,
    };
    let title_row = rsx! {
        {icon}
        if let Some(title) = props.title.clone() {
            span { class: "{content_prefix}-title", {title} }
        }
    };

    let footer = match props.footer.clone() {
        Some(footer) => footer,
        None => rsx! {
            div {
                class: "{content_prefix}-btns",
                if ok_cancel {
                    ActionButton {
                        options: props.cancel_button_props.clone(),
                        prefix_cls: btn_prefix.clone(),
                        auto_focus: auto_focus == Some(AutoFocusButton::Cancel),
                        on_activate: move |_| finish.call(ConfirmAction::Cancel),
                        "{cancel_text}"
                    }
                }
                ActionButton {
                    button_type: ok_type,
                    options: props.ok_button_props.clone(),
                    prefix_cls: btn_prefix.clone(),
                    auto_focus: auto_focus == Some(AutoFocusButton::Ok),
                    on_activate: move |_| finish.call(ConfirmAction::Ok),
                    "{ok_text}"
                }
            }
        },
    };

    rsx! {
        ConfigProvider {
            prefix_cls: root_prefix.clone(),
            icon_prefix_cls: props.icon_prefix_cls.clone(),
            direction,
            Modal {
                prefix_cls: prefix.clone(),
                class,
                wrap_class_name: wrap_class,
                open,
                title: title_row,
                footer,
                on_cancel: move |_| finish.call(ConfirmAction::Cancel),
                after_close: props.after_close,
                width,
                z_index: props.z_index,
                mask: switches.mask,
                mask_closable: switches.mask_closable,
                mask_style: props.mask_style.clone(),
                keyboard: switches.keyboard,
                centered: switches.centered,
                closable: switches.closable,
                close_icon: props.close_icon.clone(),
                focus_trigger_after_close: switches.focus_trigger_after_close,
                style: props.style.clone(),
                body_style: props.body_style.clone(),
                transition_name: props.transition_name.clone(),
                mask_transition_name: props.mask_transition_name.clone(),
                modal_render: props.modal_render,
                div {
                    class: "{content_prefix}-body",
                    {props.content.clone()}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_width_from_size_keyword() {
        assert_eq!(dialog_width(None, None), 400);
        assert_eq!(dialog_width(None, Some(DialogSize::Medium)), 600);
        assert_eq!(dialog_width(None, Some(DialogSize::Large)), 900);
        assert_eq!(dialog_width(None, Some(DialogSize::Small)), 400);
        assert_eq!(dialog_width(None, DialogSize::from_str("gigantic")), 400);
    }

    #[test]
    fn test_explicit_width_wins() {
        assert_eq!(dialog_width(Some(250), Some(DialogSize::Large)), 250);
        assert_eq!(dialog_width(Some(250), Some(DialogSize::Medium)), 250);
        assert_eq!(dialog_width(Some(250), None), 250);
        // Zero is treated as unset
        assert_eq!(dialog_width(Some(0), Some(DialogSize::Large)), 900);
    }

    #[test]
    fn test_open_precedence() {
        assert!(effective_open(Some(true), None));
        assert!(effective_open(None, Some(true)));
        assert!(!effective_open(Some(false), Some(true)));
        assert!(effective_open(Some(true), Some(false)));
        assert!(!effective_open(None, None));
    }

    #[test]
    fn test_auto_focus_defaults() {
        assert_eq!(resolve_auto_focus(None), Some(AutoFocusButton::Ok));
        assert_eq!(resolve_auto_focus(Some(AutoFocusButton::Off)), None);
        assert_eq!(
            resolve_auto_focus(Some(AutoFocusButton::Cancel)),
            Some(AutoFocusButton::Cancel)
        );
    }

    #[test]
    fn test_icon_name_misuse() {
        assert!(icon_name_misused(Some(&DialogIcon::Named("question-circle".to_string()))));
        assert!(!icon_name_misused(Some(&DialogIcon::Named("ok".to_string()))));
        assert!(!icon_name_misused(None));
    }

    #[test]
    fn test_settles_once() {
        let mut settlement = Settlement::default();
        assert!(settlement.settle());
        assert!(!settlement.settle());
        assert!(settlement.is_settled());
    }

    #[test]
    fn test_cancel_runs_handler_then_close() {
        let calls = RefCell::new(Vec::new());
        let mut settlement = Settlement::default();

        for _ in 0..2 {
            if settlement.settle() {
                run_action(
                    ConfirmAction::Cancel,
                    || calls.borrow_mut().push("on_cancel".to_string()),
                    |payload| {
                        calls
                            .borrow_mut()
                            .push(format!("close(trigger_cancel={})", payload.trigger_cancel))
                    },
                );
            }
        }

        assert_eq!(
            calls.into_inner(),
            vec!["on_cancel".to_string(), "close(trigger_cancel=true)".to_string()]
        );
    }

    #[test]
    fn test_ok_payload() {
        let mut closed = None;
        run_action(ConfirmAction::Ok, || {}, |payload| closed = Some(payload));
        assert_eq!(closed, Some(ClosePayload { trigger_cancel: false }));
    }

    #[test]
    fn test_confirm_class() {
        assert_eq!(
            confirm_class("bk-modal", ConfirmKind::Warning, Direction::Rtl, Some("x")),
            "bk-modal-confirm bk-modal-confirm-warning bk-modal-confirm-rtl x"
        );
        assert_eq!(
            confirm_class("bk-modal", ConfirmKind::Confirm, Direction::Ltr, None),
            "bk-modal-confirm bk-modal-confirm-confirm"
        );
    }

    #[test]
    fn test_prefixes_follow_root_prefix() {
        assert_eq!(
            confirm_prefixes(None, Some("acme"), "bk"),
            ("acme".to_string(), "acme-modal".to_string())
        );
        assert_eq!(
            confirm_prefixes(None, None, "bk"),
            ("bk".to_string(), "bk-modal".to_string())
        );
        assert_eq!(
            confirm_prefixes(Some("dlg"), Some("acme"), "bk"),
            ("acme".to_string(), "dlg".to_string())
        );
    }

    #[test]
    fn test_root_prefix_reaches_dialog_classes() {
        fn app() -> Element {
            rsx! {
                ConfirmDialog {
                    open: true,
                    root_prefix_cls: "acme".to_string(),
                    close: move |_| {},
                }
            }
        }
        let html = render(app);
        assert!(html.contains("acme-modal-confirm acme-modal-confirm-confirm"));
        assert!(html.contains("acme-modal-mask"));
        assert!(html.contains("class=\"acme-btn"));
        assert!(!html.contains("bk-modal"));
    }

    #[test]
    fn test_switch_defaults() {
        let switches = DialogSwitches::default();
        assert!(switches.ok_cancel);
        assert!(switches.mask);
        assert!(!switches.mask_closable);
        assert!(switches.keyboard);
        assert!(switches.closable);
    }

    #[test]
    fn test_cancel_button_shown_by_default() {
        fn app() -> Element {
            rsx! {
                ConfirmDialog {
                    open: true,
                    close: move |_| {},
                    content: rsx! { "Delete this file?" },
                }
            }
        }
        let html = render(app);
        assert_eq!(html.matches("class=\"bk-btn").count(), 2);
        assert!(html.contains(">Cancel</span>"));
        assert!(html.contains("Delete this file?"));
    }

    #[test]
    fn test_cancel_button_hidden_without_ok_cancel() {
        fn app() -> Element {
            rsx! {
                ConfirmDialog {
                    open: true,
                    ok_cancel: false,
                    close: move |_| {},
                }
            }
        }
        let html = render(app);
        assert_eq!(html.matches("class=\"bk-btn").count(), 1);
        assert!(!html.contains(">Cancel</span>"));
    }

    #[test]
    fn test_mask_rendered_unless_disabled() {
        fn masked() -> Element {
            rsx! { ConfirmDialog { open: true, close: move |_| {} } }
        }
        fn unmasked() -> Element {
            rsx! { ConfirmDialog { open: true, mask: false, close: move |_| {} } }
        }
        assert!(render(masked).contains("bk-modal-mask"));
        assert!(!render(unmasked).contains("bk-modal-mask"));
    }

    #[test]
    fn test_closed_dialog_renders_nothing() {
        fn app() -> Element {
            rsx! { ConfirmDialog { open: false, visible: true, close: move |_| {} } }
        }
        assert!(!render(app).contains("bk-modal"));
    }

    #[test]
    fn test_modal_render_wraps_dialog_box() {
        fn app() -> Element {
            rsx! {
                ConfirmDialog {
                    open: true,
                    close: move |_| {},
                    modal_render: move |node: Element| rsx! {
                        div { class: "draggable-frame", {node} }
                    },
                }
            }
        }
        let html = render(app);
        let frame = html.find("draggable-frame").unwrap_or(usize::MAX);
        let dialog = html.find("role=\"dialog\"").unwrap_or(0);
        assert!(frame < dialog);
    }
}
