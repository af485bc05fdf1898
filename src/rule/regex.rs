//! Regular-expression matching.

use regex::RegexSet;

use super::Rule;

/// Matches hosts against a set of regular expressions.
#[derive(Debug)]
pub struct RegexRule {
    set: RegexSet,
}

impl RegexRule {
    /// Compile all patterns into one set.
    pub fn new<I, S>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            set: RegexSet::new(patterns)?,
        })
    }
}

impl Rule for RegexRule {
    fn match_domain(&self, domain: &str) -> bool {
        self.set.is_match(domain)
    }

    fn pattern_count(&self) -> usize {
        self.set.len()
    }
}
