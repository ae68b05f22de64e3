#![allow(non_snake_case)]

//! Presentational Dioxus components: avatars, navigation menu entries and
//! confirmation dialogs.
//!
//! Components read ambient configuration from the nearest
//! [`ConfigProvider`](context::ConfigProvider) and produce markup with
//! `{prefix}-*` class hooks. Styling is left to the host application.

pub mod components;
pub mod context;
pub mod stores;
pub mod utils;

pub use components::*;
pub use context::{ConfigProvider, Direction};
pub use stores::confirm_store::{self, ConfirmConfig, ConfirmHandle, ConfirmHost};
