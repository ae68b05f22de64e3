// Utility functions
// Helpers shared by the components

pub mod class_names;
pub mod motion;
pub mod warning;

pub use class_names::ClassNames;
pub use motion::transition_name;
pub use warning::warning;

/// First character of a label, used by collapsed menu entries
pub fn first_char(text: &str) -> String {
    text.chars().next().map(String::from).unwrap_or_default()
}

/// Format a pixel length for inline styles
pub fn px(value: u32) -> String {
    format!("{}px", value)
}
