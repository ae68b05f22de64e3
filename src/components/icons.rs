use dioxus::prelude::*;

use crate::context::use_config;

/// Icon size prop
#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    #[props(default)]
    pub class: String,
}

/// Shared 24x24 stroke frame. Adds `{icon_prefix}` and
/// `{icon_prefix}-{name}` so icons can be targeted by name.
#[component]
fn IconFrame(name: &'static str, class: String, children: Element) -> Element {
    let icon_prefix = use_config().icon_prefix_cls;

    rsx! {
        span {
            class: "{icon_prefix} {icon_prefix}-{name} {class}",
            role: "img",
            aria_label: name,
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "1em",
                height: "1em",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                {children}
            }
        }
    }
}

#[component]
pub fn HomeIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "home", class: props.class,
            path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            polyline { points: "9 22 9 12 15 12 15 22" }
        }
    }
}

#[component]
pub fn BellIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "bell", class: props.class,
            path { d: "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9" }
            path { d: "M10.3 21a1.94 1.94 0 0 0 3.4 0" }
        }
    }
}

#[component]
pub fn UserIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "user", class: props.class,
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn SettingsIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "settings", class: props.class,
            path { d: "M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}

#[component]
pub fn InfoCircleIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "info-circle", class: props.class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 16v-4" }
            path { d: "M12 8h.01" }
        }
    }
}

#[component]
pub fn CheckCircleIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "check-circle", class: props.class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m9 12 2 2 4-4" }
        }
    }
}

#[component]
pub fn CloseCircleIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "close-circle", class: props.class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "m15 9-6 6" }
            path { d: "m9 9 6 6" }
        }
    }
}

#[component]
pub fn ExclamationCircleIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "exclamation-circle", class: props.class,
            circle { cx: "12", cy: "12", r: "10" }
            line { x1: "12", x2: "12", y1: "8", y2: "12" }
            line { x1: "12", x2: "12.01", y1: "16", y2: "16" }
        }
    }
}

#[component]
pub fn CloseIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "close", class: props.class,
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

#[component]
pub fn LoadingIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "loading", class: props.class,
            path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
        }
    }
}

#[component]
pub fn MenuFoldIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "menu-fold", class: props.class,
            rect { width: "18", height: "18", x: "3", y: "3", rx: "2" }
            path { d: "M9 3v18" }
            path { d: "m16 15-3-3 3-3" }
        }
    }
}

#[component]
pub fn MenuUnfoldIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "menu-unfold", class: props.class,
            rect { width: "18", height: "18", x: "3", y: "3", rx: "2" }
            path { d: "M9 3v18" }
            path { d: "m14 9 3 3-3 3" }
        }
    }
}

#[component]
pub fn ChevronDownIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame { name: "down", class: props.class,
            path { d: "m6 9 6 6 6-6" }
        }
    }
}
