//! Site groups and the container that aggregates them.

use serde::{Deserialize, Serialize};

use crate::entry::ResolvedList;
use crate::matcher::{classify, Matcher};
use crate::registry::Registry;
use crate::resolver::Resolver;
use crate::Result;

/// The resolved, classified rules of one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteGroup {
    /// Upper-cased source list name
    pub name: String,
    pub matchers: Vec<Matcher>,
}

impl SiteGroup {
    pub fn new(name: impl Into<String>, matchers: Vec<Matcher>) -> Self {
        Self {
            name: name.into(),
            matchers,
        }
    }

    /// Classify every entry of a resolved list.
    pub fn from_resolved(list: &ResolvedList) -> Result<Self> {
        let matchers = list
            .entries
            .iter()
            .map(classify)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(list.name.clone(), matchers))
    }
}

/// Every site group of one build, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub groups: Vec<SiteGroup>,
}

impl Container {
    pub fn new(groups: Vec<SiteGroup>) -> Self {
        Self { groups }
    }

    /// Resolve and classify every list in the registry.
    ///
    /// Stops at the first failing list; no partial container is returned.
    pub fn build(registry: &Registry) -> Result<Self> {
        let resolver = Resolver::new(registry);
        let mut groups = Vec::with_capacity(registry.len());

        for name in registry.names() {
            let resolved = resolver.resolve(name)?;
            groups.push(SiteGroup::from_resolved(&resolved)?);
        }

        let container = Self { groups };
        log::info!(
            "Built {} groups with {} matchers",
            container.groups.len(),
            container.matcher_count()
        );
        Ok(container)
    }

    /// Look up a group by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&SiteGroup> {
        self.groups
            .iter()
            .find(|g| g.name.eq_ignore_ascii_case(name))
    }

    /// Total number of matchers across all groups.
    pub fn matcher_count(&self) -> usize {
        self.groups.iter().map(|g| g.matchers.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Build a container from a registry.
pub fn build(registry: &Registry) -> Result<Container> {
    Container::build(registry)
}
