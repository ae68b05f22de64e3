//! Ambient read-only context
//!
//! Ancestors publish values with [`use_scoped_context`]; descendants read the
//! nearest one with [`use_ambient`]. Both are hooks and follow the usual hook
//! ordering rules.

use dioxus::prelude::*;

pub mod config;
pub mod menu;
pub mod sider;

pub use config::{use_config, ConfigContext, ConfigProvider, Direction};
pub use menu::{use_menu_context, MenuContext, MenuMode};
pub use sider::{use_sider_context, SiderContext};

/// Publish `value` to every descendant of the calling component.
///
/// The value is memoized on the props it was built from, so descendants
/// re-render only when it actually changes.
pub fn use_scoped_context<T>(value: T) -> Memo<T>
where
    T: Clone + PartialEq + 'static,
{
    let memo = use_memo(use_reactive(&value, |value| value));
    use_context_provider(|| memo)
}

/// Read the nearest published value of `T`, or its default when no ancestor
/// provides one.
pub fn use_ambient<T>() -> T
where
    T: Clone + PartialEq + Default + 'static,
{
    try_use_context::<Memo<T>>()
        .map(|memo| memo())
        .unwrap_or_default()
}
