use bluekit::components::icons::{BellIcon, HomeIcon, SettingsIcon, UserIcon};
use bluekit::stores::config_store;
use bluekit::{Button, ButtonType, Menu, MenuItem, MenuMode, Sider, SubMenu};
use dioxus::prelude::*;

pub mod avatars;
pub mod dialogs;
pub mod home;
pub mod menus;

use avatars::Avatars;
use dialogs::Dialogs;
use home::Home;
use menus::Menus;

/// Gallery routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/avatars")]
        Avatars {},

        #[route("/menus")]
        Menus {},

        #[route("/dialogs")]
        Dialogs {},
}

impl Route {
    fn key(&self) -> &'static str {
        match self {
            Route::Home {} => "home",
            Route::Avatars {} => "avatars",
            Route::Menus {} => "menus",
            Route::Dialogs {} => "dialogs",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "home" => Some(Route::Home {}),
            "avatars" => Some(Route::Avatars {}),
            "menus" => Some(Route::Menus {}),
            "dialogs" => Some(Route::Dialogs {}),
            _ => None,
        }
    }
}

#[component]
fn Layout() -> Element {
    let current_route = use_route::<Route>();
    let navigator = navigator();
    let direction = config_store::UI_CONFIG.read().direction.as_str();

    rsx! {
        div {
            class: "gallery-layout",
            Sider {
                collapsible: true,
                Menu {
                    mode: MenuMode::Inline,
                    selected_key: current_route.key().to_string(),
                    on_select: move |key: String| {
                        if let Some(route) = Route::from_key(&key) {
                            navigator.push(route);
                        }
                    },
                    MenuItem {
                        item_key: "home".to_string(),
                        icon: rsx! { HomeIcon {} },
                        label: "Overview",
                    }
                    MenuItem {
                        item_key: "avatars".to_string(),
                        icon: rsx! { UserIcon {} },
                        label: "Avatars",
                    }
                    SubMenu {
                        title: "Overlays".to_string(),
                        icon: rsx! { BellIcon {} },
                        default_open: true,
                        MenuItem { item_key: "menus".to_string(), label: "Menus" }
                        MenuItem { item_key: "dialogs".to_string(), label: "Dialogs" }
                    }
                }
            }
            main {
                class: "gallery-content",
                header {
                    class: "gallery-header",
                    Button {
                        button_type: ButtonType::Text,
                        onclick: move |_| config_store::toggle_direction(),
                        SettingsIcon {}
                        " Direction: {direction}"
                    }
                }
                Outlet::<Route> {}
            }
        }
    }
}
