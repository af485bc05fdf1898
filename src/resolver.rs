//! Inclusion resolution.
//!
//! Expands `include:` entries depth-first, in place, against a [`Registry`].
//! Two pieces of state are tracked per resolution:
//!
//! - `included`: every list already pulled into the result. A second include
//!   of the same list is dropped.
//! - `in_progress`: the active expansion chain from the root down. Meeting a
//!   list on this chain again is a cycle and fails the resolution.

use ahash::AHashSet;

use crate::entry::{normalize_name, RawEntry, RawList, ResolvedList};
use crate::registry::Registry;
use crate::{Error, Result};

/// Resolves lists against a shared, read-only registry.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a Registry,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Resolve one list by name.
    pub fn resolve(&self, name: &str) -> Result<ResolvedList> {
        let root = self
            .registry
            .get(name)
            .ok_or_else(|| Error::ListNotFound(normalize_name(name)))?;

        let mut expansion = Expansion {
            registry: self.registry,
            included: AHashSet::new(),
            in_progress: vec![root.name.clone()],
            entries: Vec::with_capacity(root.entries.len()),
        };
        expansion.expand(root)?;

        log::debug!(
            "Resolved {}: {} entries, {} included lists",
            root.name,
            expansion.entries.len(),
            expansion.included.len()
        );

        Ok(ResolvedList {
            name: root.name.clone(),
            included_names: expansion.included,
            entries: expansion.entries,
        })
    }
}

/// Resolve one list by name against `registry`.
pub fn resolve(name: &str, registry: &Registry) -> Result<ResolvedList> {
    Resolver::new(registry).resolve(name)
}

struct Expansion<'a> {
    registry: &'a Registry,
    included: AHashSet<String>,
    /// Root first; a list is on here only while its own entries are expanded.
    in_progress: Vec<String>,
    entries: Vec<RawEntry>,
}

impl<'a> Expansion<'a> {
    fn expand(&mut self, list: &'a RawList) -> Result<()> {
        for entry in &list.entries {
            if !entry.is_include() {
                self.entries.push(entry.clone());
                continue;
            }

            let target = normalize_name(&entry.value);

            if let Some(pos) = self.in_progress.iter().position(|n| *n == target) {
                let mut chain = self.in_progress[pos..].to_vec();
                chain.push(target);
                return Err(Error::CircularInclusion(chain));
            }

            if self.included.contains(&target) {
                log::debug!("{} already included, skipping repeat from {}", target, list.name);
                continue;
            }

            let registry = self.registry;
            let included = registry
                .get(&target)
                .ok_or_else(|| Error::UnresolvedInclude {
                    name: target.clone(),
                    from: list.name.clone(),
                })?;

            self.included.insert(target.clone());
            self.in_progress.push(target);
            self.expand(included)?;
            self.in_progress.pop();
        }

        Ok(())
    }
}
