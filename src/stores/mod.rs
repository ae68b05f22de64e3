// Global state management
// Stores provide shared state across the application

pub mod config_store;
pub mod confirm_store;
