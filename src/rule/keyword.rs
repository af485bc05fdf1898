//! Keyword (substring) matching.

use super::Rule;

/// Matches hosts containing any of its keywords.
#[derive(Debug, Default)]
pub struct KeywordRule {
    keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_pattern(&mut self, keyword: &str) {
        let keyword = keyword.trim().to_lowercase();
        if !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
    }
}

impl Rule for KeywordRule {
    fn match_domain(&self, domain: &str) -> bool {
        self.keywords.iter().any(|k| domain.contains(k.as_str()))
    }

    fn pattern_count(&self) -> usize {
        self.keywords.len()
    }
}
