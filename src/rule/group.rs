//! Compiled site groups.

use super::{DomainRule, KeywordRule, RegexRule, Rule};
use crate::container::{Container, SiteGroup};
use crate::matcher::Matcher;
use crate::{Error, Result};

/// A site group compiled for lookups.
pub struct CompiledGroup {
    name: String,
    rules: Vec<Box<dyn Rule>>,
}

impl CompiledGroup {
    /// Compile a group, failing on the first invalid regex.
    pub fn compile(group: &SiteGroup) -> Result<Self> {
        let mut domains = DomainRule::new();
        let mut keywords = KeywordRule::new();
        let mut patterns = Vec::new();

        for matcher in &group.matchers {
            match matcher {
                Matcher::Plain(v) => domains.add_suffix(v),
                Matcher::Full(v) => domains.add_exact(v),
                Matcher::Substring(v) => keywords.add_pattern(v),
                Matcher::Regex(v) => patterns.push(v.as_str()),
            }
        }

        let mut rules: Vec<Box<dyn Rule>> = Vec::new();
        if domains.pattern_count() > 0 {
            rules.push(Box::new(domains));
        }
        if keywords.pattern_count() > 0 {
            rules.push(Box::new(keywords));
        }
        if !patterns.is_empty() {
            let regexes = RegexRule::new(patterns).map_err(|source| Error::InvalidRegex {
                group: group.name.clone(),
                source,
            })?;
            rules.push(Box::new(regexes));
        }

        Ok(Self {
            name: group.name.clone(),
            rules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the host matches any rule of this group.
    pub fn matches(&self, host: &str) -> bool {
        let host = host.trim().trim_end_matches('.').to_lowercase();
        self.matches_normalized(&host)
    }

    fn matches_normalized(&self, host: &str) -> bool {
        self.rules.iter().any(|r| r.match_domain(host))
    }

    /// Number of distinct patterns.
    pub fn pattern_count(&self) -> usize {
        self.rules.iter().map(|r| r.pattern_count()).sum()
    }
}

/// All groups of a container compiled for lookups.
pub struct CompiledContainer {
    groups: Vec<CompiledGroup>,
}

impl CompiledContainer {
    pub fn compile(container: &Container) -> Result<Self> {
        let groups = container
            .groups
            .iter()
            .map(CompiledGroup::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { groups })
    }

    /// Names of every group the host belongs to, sorted.
    pub fn lookup(&self, host: &str) -> Vec<&str> {
        let host = host.trim().trim_end_matches('.').to_lowercase();
        let mut names: Vec<&str> = self
            .groups
            .iter()
            .filter(|g| g.matches_normalized(&host))
            .map(CompiledGroup::name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Look up a group by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&CompiledGroup> {
        self.groups
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
