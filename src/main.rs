#![allow(non_snake_case)]

use bluekit::stores::config_store;
use bluekit::{ConfigProvider, ConfirmHost};
use dioxus::prelude::*;

// Gallery pages
mod routes;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting bluekit component gallery");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_effect(move || {
        config_store::init_config();
    });

    let config = config_store::UI_CONFIG.read().clone();

    rsx! {
        ConfigProvider {
            prefix_cls: config.prefix_cls,
            direction: config.direction,
            Router::<routes::Route> {}
            ConfirmHost {}
        }
    }
}
