//! Suffix and exact domain matching.

use ahash::AHashSet;

use super::Rule;

/// DomainRule matches domain names using exact or suffix matching.
///
/// # Pattern Formats
/// - Suffix (`domain:`): `example.com` matches `example.com`, `www.example.com`, etc.
/// - Exact (`full:`): `example.com` matches only `example.com`
///
/// # Examples
/// ```
/// use dlc::rule::{DomainRule, Rule};
///
/// let mut rule = DomainRule::new();
/// rule.add_suffix("google.com");
/// rule.add_exact("www.youtube.com");
///
/// assert!(rule.match_domain("mail.google.com"));
/// assert!(!rule.match_domain("m.youtube.com"));
/// ```
#[derive(Debug, Default)]
pub struct DomainRule {
    /// Exact match domains (lowercase)
    exacts: AHashSet<String>,
    /// Suffix match domains (lowercase)
    suffixes: AHashSet<String>,
}

impl DomainRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a suffix pattern.
    pub fn add_suffix(&mut self, pattern: &str) {
        self.suffixes.insert(pattern.trim().to_lowercase());
    }

    /// Add an exact pattern.
    pub fn add_exact(&mut self, pattern: &str) {
        self.exacts.insert(pattern.trim().to_lowercase());
    }

    pub fn exact_count(&self) -> usize {
        self.exacts.len()
    }

    pub fn suffix_count(&self) -> usize {
        self.suffixes.len()
    }

    fn match_suffix(&self, domain: &str) -> bool {
        if self.suffixes.contains(domain) {
            return true;
        }

        // Check parent domains
        let mut current = domain;
        while let Some(pos) = current.find('.') {
            current = &current[pos + 1..];
            if self.suffixes.contains(current) {
                return true;
            }
        }

        false
    }
}

impl Rule for DomainRule {
    fn match_domain(&self, domain: &str) -> bool {
        if domain.is_empty() {
            return false;
        }
        self.exacts.contains(domain) || self.match_suffix(domain)
    }

    fn pattern_count(&self) -> usize {
        self.exact_count() + self.suffix_count()
    }
}
