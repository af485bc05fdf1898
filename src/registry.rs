//! Registry of raw lists keyed by normalized name.

use ahash::AHashMap;
use std::fs::{self, File};
use std::path::Path;
use walkdir::WalkDir;

use crate::converter::TextParser;
use crate::entry::{normalize_name, RawList};
use crate::{Error, Result};

/// Read-only source of raw lists for resolution.
///
/// Built once before any resolution starts and never mutated afterwards.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    lists: AHashMap<String, RawList>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every regular file below `dir` as a list named after its basename.
    ///
    /// Entries are visited in sorted order, so when two files share a
    /// basename the one walked last replaces the other. Symlinked
    /// directories are not descended into; symlinks to files are loaded.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut registry = Self::new();

        for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                continue;
            }
            if file_type.is_symlink() && !fs::metadata(path)?.is_file() {
                log::debug!("Skipping symlink {:?}: not a regular file", path);
                continue;
            }

            let name = entry
                .file_name()
                .to_str()
                .ok_or_else(|| Error::InvalidListName(path.to_path_buf()))?;
            let list = TextParser::parse(name, File::open(path)?)?;
            log::debug!("Loaded {} ({} entries) from {:?}", list.name, list.entries.len(), path);
            registry.insert(list);
        }

        log::info!("Loaded {} lists from {:?}", registry.len(), dir);
        Ok(registry)
    }

    /// Insert a list, returning the one it replaced.
    pub fn insert(&mut self, list: RawList) -> Option<RawList> {
        let replaced = self.lists.insert(list.name.clone(), list);
        if let Some(old) = &replaced {
            log::warn!("List {} loaded more than once, last one wins", old.name);
        }
        replaced
    }

    /// Look up a list by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&RawList> {
        self.lists.get(&normalize_name(name))
    }

    /// All list names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lists.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterate over all lists in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &RawList> {
        self.lists.values()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl FromIterator<RawList> for Registry {
    fn from_iter<I: IntoIterator<Item = RawList>>(iter: I) -> Self {
        let mut registry = Self::new();
        for list in iter {
            registry.insert(list);
        }
        registry
    }
}
