use anyhow::Context;
use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::context::config::DEFAULT_PREFIX_CLS;
use crate::context::Direction;

/// User-adjustable UI settings persisted across sessions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub direction: Direction,
    pub prefix_cls: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            prefix_cls: DEFAULT_PREFIX_CLS.to_string(),
        }
    }
}

/// Global UI config state
pub static UI_CONFIG: GlobalSignal<UiConfig> = Signal::global(UiConfig::default);

const STORAGE_KEY: &str = "bluekit_ui_config";

/// Read the stored config
pub fn load_config() -> anyhow::Result<UiConfig> {
    LocalStorage::get::<UiConfig>(STORAGE_KEY)
        .with_context(|| format!("no usable UI config under `{}`", STORAGE_KEY))
}

/// Initialize config from localStorage, falling back to defaults
pub fn init_config() {
    match load_config() {
        Ok(config) => {
            log::info!("Loaded UI config from storage: {:?}", config);
            *UI_CONFIG.write() = config;
        }
        Err(e) => {
            log::info!("Using default UI config ({:#})", e);
            *UI_CONFIG.write() = UiConfig::default();
        }
    }

    apply_direction();
}

fn save_config() {
    let config = UI_CONFIG.read().clone();
    if let Err(e) = LocalStorage::set(STORAGE_KEY, &config) {
        log::warn!("Failed to persist UI config: {}", e);
    }
}

/// Set text direction and persist it
pub fn set_direction(direction: Direction) {
    if UI_CONFIG.read().direction == direction {
        return;
    }

    UI_CONFIG.write().direction = direction;
    log::info!("Direction changed to: {}", direction.as_str());
    save_config();
    apply_direction();
}

/// Flip between ltr and rtl
pub fn toggle_direction() {
    let next = match UI_CONFIG.read().direction {
        Direction::Ltr => Direction::Rtl,
        Direction::Rtl => Direction::Ltr,
    };
    set_direction(next);
}

/// Get current config
pub fn get_config() -> UiConfig {
    UI_CONFIG.read().clone()
}

/// Mirror the direction onto the document root
pub fn apply_direction() {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::window;

        if let Some(root) = window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element())
        {
            let direction = UI_CONFIG.read().direction;
            root.set_attribute("dir", direction.as_str()).ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: UiConfig = serde_json::from_str(r#"{"direction":"rtl"}"#).unwrap();
        assert_eq!(config.direction, Direction::Rtl);
        assert_eq!(config.prefix_cls, DEFAULT_PREFIX_CLS);
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = UiConfig {
            direction: Direction::Rtl,
            prefix_cls: "acme".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"direction":"rtl","prefix_cls":"acme"}"#);
    }
}
