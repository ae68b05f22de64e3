/// Builder for space-separated class strings.
///
/// Empty entries are skipped so callers can chain optional classes without
/// producing double spaces.
///
/// ```
/// use bluekit::utils::ClassNames;
///
/// let class = ClassNames::new()
///     .with("bk-menu-item")
///     .with_if(true, "bk-menu-item-danger")
///     .with_opt(None)
///     .build();
/// assert_eq!(class, "bk-menu-item bk-menu-item-danger");
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClassNames {
    parts: Vec<String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class unconditionally
    pub fn with(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        let trimmed = class.trim();
        if !trimmed.is_empty() {
            self.parts.push(trimmed.to_string());
        }
        self
    }

    /// Append a class when `condition` holds
    pub fn with_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition {
            self.with(class)
        } else {
            self
        }
    }

    /// Append a caller-supplied class if there is one
    pub fn with_opt(self, class: Option<&str>) -> Self {
        match class {
            Some(class) => self.with(class),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn build(self) -> String {
        self.parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_empty_and_false_entries() {
        let class = ClassNames::new()
            .with("a")
            .with("")
            .with("  ")
            .with_if(false, "b")
            .with_if(true, "c")
            .with_opt(Some(""))
            .with_opt(Some("d"))
            .build();
        assert_eq!(class, "a c d");
    }

    #[test]
    fn test_empty_builder() {
        let names = ClassNames::new();
        assert!(names.is_empty());
        assert_eq!(names.build(), "");
    }
}
