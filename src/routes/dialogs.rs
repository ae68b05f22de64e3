use bluekit::components::icons::ExclamationCircleIcon;
use bluekit::confirm_store::{self, ConfirmConfig};
use bluekit::{AutoFocusButton, Button, ButtonOptions, ButtonType, ClosePayload, ConfirmDialog, DialogIcon, DialogSize};
use dioxus::prelude::*;

#[component]
pub fn Dialogs() -> Element {
    let mut open = use_signal(|| false);
    let mut size = use_signal(|| None::<DialogSize>);
    let mut log_lines = use_signal(Vec::<String>::new);

    let mut record = move |line: String| {
        log::info!("{}", line);
        log_lines.write().push(line);
    };

    rsx! {
        section {
            class: "gallery-page",
            h2 { "Declarative" }
            div {
                class: "gallery-row",
                Button {
                    onclick: move |_| {
                        size.set(None);
                        open.set(true);
                    },
                    "Default width"
                }
                Button {
                    onclick: move |_| {
                        size.set(Some(DialogSize::Medium));
                        open.set(true);
                    },
                    "Medium"
                }
                Button {
                    onclick: move |_| {
                        size.set(Some(DialogSize::Large));
                        open.set(true);
                    },
                    "Large"
                }
            }

            ConfirmDialog {
                open: open(),
                size: size(),
                icon: DialogIcon::Node(rsx! { ExclamationCircleIcon {} }),
                title: rsx! { "Discard draft?" },
                content: rsx! { "Your unsaved changes will be lost." },
                ok_text: "Discard".to_string(),
                ok_button_props: ButtonOptions { danger: true, ..Default::default() },
                auto_focus_button: AutoFocusButton::Cancel,
                on_ok: move |_| record("on_ok".to_string()),
                on_cancel: move |_| record("on_cancel".to_string()),
                close: move |payload: ClosePayload| {
                    record(format!("close(trigger_cancel: {})", payload.trigger_cancel));
                    open.set(false);
                },
                after_close: move |_| record("after_close".to_string()),
            }

            h2 { "Imperative" }
            div {
                class: "gallery-row",
                Button {
                    button_type: ButtonType::Primary,
                    onclick: move |_| {
                        confirm_store::confirm(
                            ConfirmConfig::new("Delete this item?")
                                .content("This cannot be undone.")
                                .on_ok(|| log::info!("Confirmed delete"))
                                .on_cancel(|| log::info!("Kept item")),
                        );
                    },
                    "Confirm"
                }
                Button {
                    onclick: move |_| {
                        confirm_store::info(ConfirmConfig::new("Heads up").content("Maintenance at noon."));
                    },
                    "Info"
                }
                Button {
                    onclick: move |_| {
                        confirm_store::success(ConfirmConfig::new("Saved"));
                    },
                    "Success"
                }
                Button {
                    onclick: move |_| {
                        let handle = confirm_store::error(ConfirmConfig::new("Upload failed"));
                        handle.update(|config| config.content = Some("Retry from the uploads page.".to_string()));
                    },
                    "Error"
                }
                Button {
                    onclick: move |_| {
                        confirm_store::warning(ConfirmConfig {
                            size: Some(DialogSize::Large),
                            ..ConfirmConfig::new("Quota almost full")
                        });
                    },
                    "Warning (large)"
                }
                Button {
                    button_type: ButtonType::Dashed,
                    onclick: move |_| confirm_store::destroy_all(),
                    "Close all"
                }
            }

            h2 { "Event log" }
            ul {
                for (i, line) in log_lines.read().iter().enumerate() {
                    li { key: "{i}", "{line}" }
                }
            }
        }
    }
}
