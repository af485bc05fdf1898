//! Rule tag definitions.

use std::fmt;

/// RuleKind is the tag written in front of a value in a domain-list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `domain:` suffix match (also the default when a line has no tag)
    Domain,
    /// `regex:` regular-expression match
    Regex,
    /// `keyword:` substring match
    Keyword,
    /// `full:` exact match
    Full,
    /// `include:` reference to another list
    Include,
}

impl RuleKind {
    /// Parse a rule kind from a tag (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "domain" => Some(RuleKind::Domain),
            "regex" => Some(RuleKind::Regex),
            "keyword" => Some(RuleKind::Keyword),
            "full" => Some(RuleKind::Full),
            "include" => Some(RuleKind::Include),
            _ => None,
        }
    }

    /// Get the canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Domain => "domain",
            RuleKind::Regex => "regex",
            RuleKind::Keyword => "keyword",
            RuleKind::Full => "full",
            RuleKind::Include => "include",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
