/// Resolve the transition class hook for a motion.
///
/// An explicit name always wins, otherwise `{root_prefix_cls}-{motion}`.
pub fn transition_name(root_prefix_cls: &str, motion: &str, transition_name: Option<&str>) -> String {
    match transition_name {
        Some(name) => name.to_string(),
        None => format!("{}-{}", root_prefix_cls, motion),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transition_name() {
        assert_eq!(transition_name("bk", "zoom", None), "bk-zoom");
        assert_eq!(transition_name("bk", "fade", None), "bk-fade");
    }

    #[test]
    fn test_explicit_transition_name() {
        assert_eq!(transition_name("bk", "zoom", Some("slide-up")), "slide-up");
        // An explicit empty name disables the hook
        assert_eq!(transition_name("bk", "zoom", Some("")), "");
    }
}
