//! Classified domain matchers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entry::RawEntry;
use crate::{Error, Result, RuleKind};

/// A classified domain-matching rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Matcher {
    /// Domain and all of its subdomains
    Plain(String),
    /// Regular expression over the whole host
    Regex(String),
    /// Host contains the value
    Substring(String),
    /// Host equals the value
    Full(String),
}

impl Matcher {
    /// The matched value.
    pub fn value(&self) -> &str {
        match self {
            Matcher::Plain(v) | Matcher::Regex(v) | Matcher::Substring(v) | Matcher::Full(v) => {
                v.as_str()
            }
        }
    }

    /// Source tag this matcher is written with.
    pub fn rule_kind(&self) -> RuleKind {
        match self {
            Matcher::Plain(_) => RuleKind::Domain,
            Matcher::Regex(_) => RuleKind::Regex,
            Matcher::Substring(_) => RuleKind::Keyword,
            Matcher::Full(_) => RuleKind::Full,
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.rule_kind(), self.value())
    }
}

/// Classify a raw entry into a matcher.
///
/// `include` entries and unknown tags are rejected; there is no fallback kind.
pub fn classify(entry: &RawEntry) -> Result<Matcher> {
    let value = entry.value.clone();
    match RuleKind::parse(&entry.tag) {
        Some(RuleKind::Domain) => Ok(Matcher::Plain(value)),
        Some(RuleKind::Regex) => Ok(Matcher::Regex(value)),
        Some(RuleKind::Keyword) => Ok(Matcher::Substring(value)),
        Some(RuleKind::Full) => Ok(Matcher::Full(value)),
        Some(RuleKind::Include) | None => Err(Error::UnknownRuleKind(entry.tag.clone())),
    }
}
