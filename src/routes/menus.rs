use bluekit::components::icons::{BellIcon, HomeIcon, SettingsIcon};
use bluekit::context::ConfigProvider;
use bluekit::{Direction, ItemTitle, Menu, MenuItem, MenuLabel, MenuMode};
use dioxus::prelude::*;

#[component]
pub fn Menus() -> Element {
    let mut collapsed = use_signal(|| false);
    let mut rtl = use_signal(|| false);
    let mut last_clicked = use_signal(|| None::<String>);

    let direction = if rtl() { Direction::Rtl } else { Direction::Ltr };

    rsx! {
        section {
            class: "gallery-page",
            div {
                class: "gallery-row",
                label {
                    input {
                        r#type: "checkbox",
                        checked: collapsed(),
                        onchange: move |evt| collapsed.set(evt.checked()),
                    }
                    " Inline collapsed"
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: rtl(),
                        onchange: move |evt| rtl.set(evt.checked()),
                    }
                    " Right to left"
                }
            }

            ConfigProvider {
                direction,
                Menu {
                    mode: MenuMode::Inline,
                    inline_collapsed: collapsed(),
                    default_selected_key: "dashboard".to_string(),
                    style: "width: 256px".to_string(),
                    on_select: move |key: String| last_clicked.set(Some(key)),
                    MenuItem {
                        item_key: "dashboard".to_string(),
                        icon: rsx! { HomeIcon {} },
                        label: "Dashboard",
                    }
                    MenuItem {
                        item_key: "inbox".to_string(),
                        icon: rsx! { BellIcon {} },
                        label: "Inbox",
                        title: ItemTitle::Text("Unread messages".to_string()),
                    }
                    // No icon: collapses to its first letter
                    MenuItem {
                        item_key: "reports".to_string(),
                        label: "Reports",
                    }
                    MenuItem {
                        item_key: "settings".to_string(),
                        icon: rsx! { SettingsIcon {} },
                        label: MenuLabel::Inline(rsx! { span { "Settings" } }),
                        title: ItemTitle::Hidden,
                    }
                    MenuItem {
                        item_key: "delete".to_string(),
                        label: "Delete workspace",
                        danger: true,
                    }
                    MenuItem {
                        item_key: "archived".to_string(),
                        label: "Archived",
                        disabled: true,
                    }
                }
            }

            if let Some(key) = last_clicked() {
                p { "Selected: {key}" }
            }

            h2 { "Without tooltips" }
            Menu {
                mode: MenuMode::Inline,
                inline_collapsed: true,
                disable_menu_item_title_tooltip: true,
                style: "width: 80px".to_string(),
                MenuItem { icon: rsx! { HomeIcon {} }, label: "Home" }
                MenuItem { label: "Plain" }
            }
        }
    }
}
