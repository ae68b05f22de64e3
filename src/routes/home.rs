use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "gallery-page",
            h1 { "bluekit" }
            p {
                "Presentational components for Dioxus. Collapse the sider to see "
                "menu entries fall back to tooltips, or switch the text direction "
                "from the header."
            }
            ul {
                li { Link { to: Route::Avatars {}, "Avatars and groups" } }
                li { Link { to: Route::Menus {}, "Menu items" } }
                li { Link { to: Route::Dialogs {}, "Confirmation dialogs" } }
            }
        }
    }
}
