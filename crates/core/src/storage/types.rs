/// How a tag search compares the requested tag with stored tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagMatch {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// Equality after lowercasing both sides.
    IgnoreCase,
}

impl TagMatch {
    /// Picks the match mode from a "case insensitive" flag.
    pub fn from_case_insensitive(case_insensitive: bool) -> Self {
        if case_insensitive {
            TagMatch::IgnoreCase
        } else {
            TagMatch::Exact
        }
    }

    /// Returns true if this mode ignores case.
    pub fn ignores_case(self) -> bool {
        matches!(self, TagMatch::IgnoreCase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact() {
        assert_eq!(TagMatch::default(), TagMatch::Exact);
    }

    #[test]
    fn test_from_case_insensitive() {
        assert_eq!(TagMatch::from_case_insensitive(true), TagMatch::IgnoreCase);
        assert_eq!(TagMatch::from_case_insensitive(false), TagMatch::Exact);
        assert!(TagMatch::IgnoreCase.ignores_case());
        assert!(!TagMatch::Exact.ignores_case());
    }
}
