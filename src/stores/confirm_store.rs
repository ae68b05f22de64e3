//! Imperative confirmation dialogs
//!
//! `confirm(..)` and its siblings queue a dialog into [`CONFIRMS`] and return
//! a handle. Mount a single [`ConfirmHost`] near the app root to display
//! them.

use dioxus::prelude::*;
use std::rc::Rc;
use uuid::Uuid;

use crate::components::button::ButtonType;
use crate::components::icons::{CheckCircleIcon, CloseCircleIcon, ExclamationCircleIcon, InfoCircleIcon};
use crate::components::modal::{AutoFocusButton, ClosePayload, ConfirmDialog, ConfirmKind, DialogIcon, DialogSize};

/// Callback stored in a confirm config
#[derive(Clone)]
pub struct ConfirmCallback(Rc<dyn Fn()>);

impl ConfirmCallback {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl PartialEq for ConfirmCallback {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Settings for an imperatively opened dialog
#[derive(Clone, Default, PartialEq)]
pub struct ConfirmConfig {
    pub kind: ConfirmKind,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Drop the kind's default icon
    pub hide_icon: bool,
    pub ok_text: Option<String>,
    pub cancel_text: Option<String>,
    pub ok_type: Option<ButtonType>,
    pub ok_cancel: Option<bool>,
    pub auto_focus_button: Option<AutoFocusButton>,
    pub width: Option<u32>,
    pub size: Option<DialogSize>,
    pub centered: Option<bool>,
    pub mask_closable: Option<bool>,
    pub class: Option<String>,
    pub on_ok: Option<ConfirmCallback>,
    pub on_cancel: Option<ConfirmCallback>,
    pub after_close: Option<ConfirmCallback>,
}

impl ConfirmConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn on_ok(mut self, f: impl Fn() + 'static) -> Self {
        self.on_ok = Some(ConfirmCallback::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl Fn() + 'static) -> Self {
        self.on_cancel = Some(ConfirmCallback::new(f));
        self
    }
}

/// Apply a kind's defaults. Only `Confirm` shows a cancel button unless the
/// caller says otherwise.
pub fn prepare(mut config: ConfirmConfig, kind: ConfirmKind) -> ConfirmConfig {
    config.kind = kind;
    config
        .ok_cancel
        .get_or_insert(matches!(kind, ConfirmKind::Confirm));
    config
}

#[derive(Clone, PartialEq)]
pub struct ConfirmEntry {
    pub id: String,
    pub config: ConfirmConfig,
    pub open: bool,
}

/// Live imperative dialogs, in opening order
pub static CONFIRMS: GlobalSignal<Vec<ConfirmEntry>> = Signal::global(Vec::new);

/// Mark an entry closed. Returns false when it was missing or already closed.
pub fn close_in(entries: &mut [ConfirmEntry], id: &str) -> bool {
    match entries.iter_mut().find(|entry| entry.id == id && entry.open) {
        Some(entry) => {
            entry.open = false;
            true
        }
        None => false,
    }
}

pub fn remove_in(entries: &mut Vec<ConfirmEntry>, id: &str) -> Option<ConfirmEntry> {
    let index = entries.iter().position(|entry| entry.id == id)?;
    Some(entries.remove(index))
}

pub fn update_in(entries: &mut [ConfirmEntry], id: &str, f: impl FnOnce(&mut ConfirmConfig)) -> bool {
    match entries.iter_mut().find(|entry| entry.id == id) {
        Some(entry) => {
            f(&mut entry.config);
            true
        }
        None => false,
    }
}

/// Control over one open dialog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmHandle {
    id: String,
}

impl ConfirmHandle {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Change the live dialog's settings
    pub fn update(&self, f: impl FnOnce(&mut ConfirmConfig)) {
        if !update_in(&mut CONFIRMS.write(), &self.id, f) {
            log::debug!("Confirm {} already gone, update ignored", self.id);
        }
    }

    /// Close the dialog without firing ok or cancel handlers
    pub fn destroy(&self) {
        close_entry(&self.id);
    }
}

fn open_with(config: ConfirmConfig) -> ConfirmHandle {
    let id = Uuid::new_v4().to_string();
    log::debug!("Opening {} dialog {}", config.kind.as_str(), id);
    CONFIRMS.write().push(ConfirmEntry {
        id: id.clone(),
        config,
        open: true,
    });
    ConfirmHandle { id }
}

pub fn confirm(config: ConfirmConfig) -> ConfirmHandle {
    open_with(prepare(config, ConfirmKind::Confirm))
}

pub fn info(config: ConfirmConfig) -> ConfirmHandle {
    open_with(prepare(config, ConfirmKind::Info))
}

pub fn success(config: ConfirmConfig) -> ConfirmHandle {
    open_with(prepare(config, ConfirmKind::Success))
}

pub fn error(config: ConfirmConfig) -> ConfirmHandle {
    open_with(prepare(config, ConfirmKind::Error))
}

pub fn warning(config: ConfirmConfig) -> ConfirmHandle {
    open_with(prepare(config, ConfirmKind::Warning))
}

/// Alias of [`warning`]
pub fn warn(config: ConfirmConfig) -> ConfirmHandle {
    warning(config)
}

fn close_entry(id: &str) {
    close_in(&mut CONFIRMS.write(), id);
}

/// Close every open imperative dialog
pub fn destroy_all() {
    let mut entries = CONFIRMS.write();
    let count = entries.iter().filter(|entry| entry.open).count();
    for entry in entries.iter_mut() {
        entry.open = false;
    }
    log::debug!("Destroyed {} confirm dialogs", count);
}

fn default_icon(kind: ConfirmKind) -> Element {
    match kind {
        ConfirmKind::Info => rsx! { InfoCircleIcon {} },
        ConfirmKind::Success => rsx! { CheckCircleIcon {} },
        ConfirmKind::Error => rsx! { CloseCircleIcon {} },
        ConfirmKind::Confirm | ConfirmKind::Warning => rsx! { ExclamationCircleIcon {} },
    }
}

#[component]
fn ConfirmEntryView(entry: ConfirmEntry) -> Element {
    let config = entry.config.clone();
    let id = entry.id.clone();
    let close_id = id.clone();
    let icon = if config.hide_icon {
        None
    } else {
        Some(DialogIcon::Node(default_icon(config.kind)))
    };

    let on_ok = config.on_ok.clone();
    let on_cancel = config.on_cancel.clone();
    let after_close = config.after_close.clone();

    rsx! {
        ConfirmDialog {
            kind: config.kind,
            icon,
            title: config.title.clone().map(|title| rsx! { "{title}" }),
            content: config.content.clone().map(|content| rsx! { "{content}" }),
            ok_text: config.ok_text.clone(),
            cancel_text: config.cancel_text.clone(),
            ok_type: config.ok_type,
            ok_cancel: config.ok_cancel,
            auto_focus_button: config.auto_focus_button,
            width: config.width,
            size: config.size,
            centered: config.centered,
            mask_closable: config.mask_closable,
            class: config.class.clone(),
            open: entry.open,
            on_ok: move |_| {
                if let Some(callback) = &on_ok {
                    callback.call();
                }
            },
            on_cancel: move |_| {
                if let Some(callback) = &on_cancel {
                    callback.call();
                }
            },
            close: move |payload: ClosePayload| {
                log::debug!("Confirm {} closed (cancel: {})", close_id, payload.trigger_cancel);
                close_entry(&close_id);
            },
            after_close: move |_| {
                remove_in(&mut CONFIRMS.write(), &id);
                if let Some(callback) = &after_close {
                    callback.call();
                }
            },
        }
    }
}

/// Renders every dialog opened through this module
#[component]
pub fn ConfirmHost() -> Element {
    let entries = CONFIRMS.read().clone();

    rsx! {
        for (id, entry) in entries.into_iter().map(|entry| (entry.id.clone(), entry)) {
            ConfirmEntryView { key: "{id}", entry }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> ConfirmEntry {
        ConfirmEntry {
            id: id.to_string(),
            config: ConfirmConfig::new(id),
            open: true,
        }
    }

    #[test]
    fn test_prepare_sets_kind_defaults() {
        let config = prepare(ConfirmConfig::new("Delete?"), ConfirmKind::Confirm);
        assert_eq!(config.kind, ConfirmKind::Confirm);
        assert_eq!(config.ok_cancel, Some(true));

        let config = prepare(ConfirmConfig::new("Saved"), ConfirmKind::Success);
        assert_eq!(config.kind, ConfirmKind::Success);
        assert_eq!(config.ok_cancel, Some(false));
    }

    #[test]
    fn test_prepare_keeps_explicit_ok_cancel() {
        let config = ConfirmConfig {
            ok_cancel: Some(true),
            ..ConfirmConfig::new("Heads up")
        };
        let config = prepare(config, ConfirmKind::Warning);
        assert_eq!(config.ok_cancel, Some(true));
    }

    #[test]
    fn test_close_in_only_once() {
        let mut entries = vec![entry("a"), entry("b")];
        assert!(close_in(&mut entries, "a"));
        assert!(!close_in(&mut entries, "a"));
        assert!(!close_in(&mut entries, "missing"));
        assert!(!entries[0].open);
        assert!(entries[1].open);
    }

    #[test]
    fn test_remove_in() {
        let mut entries = vec![entry("a"), entry("b")];
        let removed = remove_in(&mut entries, "a").map(|entry| entry.id);
        assert_eq!(removed.as_deref(), Some("a"));
        assert_eq!(entries.len(), 1);
        assert!(remove_in(&mut entries, "a").is_none());
    }

    #[test]
    fn test_update_in() {
        let mut entries = vec![entry("a")];
        assert!(update_in(&mut entries, "a", |config| {
            config.title = Some("Renamed".to_string())
        }));
        assert_eq!(entries[0].config.title.as_deref(), Some("Renamed"));
        assert!(!update_in(&mut entries, "zzz", |_| {}));
    }

    #[test]
    fn test_callbacks_compare_by_identity() {
        let a = ConfirmCallback::new(|| {});
        let b = ConfirmCallback::new(|| {});
        assert!(a == a.clone());
        assert!(a != b);
    }
}
