//! Raw (unclassified) list entries.

use ahash::AHashSet;

use crate::RuleKind;

/// One `(tag, value)` pair parsed from a non-comment, non-blank line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawEntry {
    /// Rule tag, e.g. `domain`, `keyword` or `include`
    pub tag: String,
    /// Rule value
    pub value: String,
}

impl RawEntry {
    /// Create a new entry.
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Create a `domain:` entry.
    pub fn domain(value: impl Into<String>) -> Self {
        Self::new(RuleKind::Domain.as_str(), value)
    }

    /// Create an `include:` entry.
    pub fn include(list: impl Into<String>) -> Self {
        Self::new(RuleKind::Include.as_str(), list)
    }

    /// Whether this entry references another list.
    pub fn is_include(&self) -> bool {
        RuleKind::parse(&self.tag) == Some(RuleKind::Include)
    }
}

/// A named list exactly as loaded from the source data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawList {
    /// Upper-cased list name
    pub name: String,
    /// Entries in file order
    pub entries: Vec<RawEntry>,
}

impl RawList {
    /// Create a list, normalizing the name.
    pub fn new(name: &str, entries: Vec<RawEntry>) -> Self {
        Self {
            name: normalize_name(name),
            entries,
        }
    }
}

/// A list with every `include` expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedList {
    pub name: String,
    /// Lists pulled in through (transitive) inclusion
    pub included_names: AHashSet<String>,
    /// Entries in depth-first substitution order, never containing `include`
    pub entries: Vec<RawEntry>,
}

/// Normalize a list name for registry lookups.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_detection_is_case_insensitive() {
        assert!(RawEntry::new("include", "b").is_include());
        assert!(RawEntry::new("INCLUDE", "b").is_include());
        assert!(!RawEntry::domain("include.com").is_include());
    }

    #[test]
    fn test_raw_list_name_is_normalized() {
        let list = RawList::new("google", vec![]);
        assert_eq!(list.name, "GOOGLE");
    }
}
