use dioxus::prelude::*;

use crate::components::icons::LoadingIcon;
use crate::context::use_config;
use crate::utils::ClassNames;

/// Visual style of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Default,
    Primary,
    Dashed,
    Link,
    Text,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Default => "default",
            ButtonType::Primary => "primary",
            ButtonType::Dashed => "dashed",
            ButtonType::Link => "link",
            ButtonType::Text => "text",
        }
    }
}

/// Extra settings forwarded to a dialog's ok/cancel button
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonOptions {
    pub danger: bool,
    pub disabled: bool,
    pub loading: bool,
    pub class: Option<String>,
}

pub fn button_class(prefix: &str, button_type: ButtonType, options: &ButtonOptions) -> String {
    ClassNames::new()
        .with(prefix)
        .with_if(
            button_type != ButtonType::Default,
            format!("{}-{}", prefix, button_type.as_str()),
        )
        .with_if(options.danger, format!("{}-dangerous", prefix))
        .with_if(options.loading, format!("{}-loading", prefix))
        .with_opt(options.class.as_deref())
        .build()
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub button_type: ButtonType,
    #[props(default)]
    pub options: ButtonOptions,
    pub prefix_cls: Option<String>,
    #[props(default = false)]
    pub auto_focus: bool,
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let config = use_config();
    let prefix = config.prefix_for("btn", props.prefix_cls.as_deref());
    let class = button_class(&prefix, props.button_type, &props.options);
    let inert = props.options.disabled || props.options.loading;
    let auto_focus = props.auto_focus;
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: props.options.disabled,
            onmounted: move |evt: MountedEvent| async move {
                if auto_focus {
                    let _ = evt.set_focus(true).await;
                }
            },
            onclick: move |evt| {
                if inert {
                    return;
                }
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            if props.options.loading {
                LoadingIcon { class: format!("{}-loading-icon", prefix) }
            }
            span { {props.children} }
        }
    }
}

/// Button that reports a single activation.
///
/// Repeated clicks after the first are dropped until the button is
/// remounted.
#[component]
pub fn ActionButton(
    #[props(default)] button_type: ButtonType,
    #[props(default)] options: ButtonOptions,
    #[props(default = false)] auto_focus: bool,
    prefix_cls: String,
    on_activate: EventHandler<()>,
    children: Element,
) -> Element {
    let mut clicked = use_signal(|| false);

    rsx! {
        Button {
            button_type,
            options,
            prefix_cls,
            auto_focus,
            onclick: move |_| {
                if clicked() {
                    return;
                }
                clicked.set(true);
                on_activate.call(());
            },
            {children}
        }
    }
}
