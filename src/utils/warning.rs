use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Mutex;

/// Messages already reported, so re-renders don't flood the console
static WARNED: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Report developer misuse when `valid` is false.
///
/// Only active in debug builds. Each distinct message is logged once.
/// Returns true when a warning was emitted.
pub fn warning(valid: bool, component: &str, message: &str) -> bool {
    if !cfg!(debug_assertions) || valid {
        return false;
    }

    let text = format!("[bluekit: {}] {}", component, message);
    let mut warned = WARNED.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if !warned.insert(text.clone()) {
        return false;
    }

    log::warn!("{}", text);
    true
}

/// Forget previously reported messages
pub fn reset_warned() {
    WARNED
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_condition_is_silent() {
        assert!(!warning(true, "Test", "never shown"));
    }

    #[test]
    fn test_each_message_reported_once() {
        let message = "`foo` is deprecated (dedup test)";
        let first = warning(false, "Test", message);
        let second = warning(false, "Test", message);

        if cfg!(debug_assertions) {
            assert!(first);
            assert!(!second);
        } else {
            assert!(!first);
            assert!(!second);
        }
    }
}
