//! Runtime matching over compiled site groups.
//!
//! A router loads the container and asks which groups a host belongs to.
//! This module is the reference implementation of those semantics.

mod domain;
mod group;
mod keyword;
mod regex;

pub use self::domain::DomainRule;
pub use self::group::{CompiledContainer, CompiledGroup};
pub use self::keyword::KeywordRule;
pub use self::regex::RegexRule;

/// Rule trait defines the interface for all matcher implementations.
pub trait Rule: Send + Sync {
    /// Match a lower-cased host name against this rule.
    fn match_domain(&self, domain: &str) -> bool;

    /// Number of patterns held by this rule.
    fn pattern_count(&self) -> usize;
}
