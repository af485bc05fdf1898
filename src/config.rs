//! Build configuration.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::binary::DEFAULT_OUTPUT;
use crate::{Error, Result};

/// Location of the source data below a `GOPATH` entry.
pub const DATA_SUBDIR: &str = "src/github.com/v2ray/domain-list-community/data";

/// Environment variable searched when no data directory is given.
pub const GOPATH_ENV: &str = "GOPATH";

/// Settings for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Source data directory; detected from `GOPATH` when unset
    pub data_dir: Option<PathBuf>,
    /// Output file
    pub output: PathBuf,
    /// Also write a `<output>.sha256sum` file
    pub checksum: bool,
    /// Gzip the output
    pub gzip: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            checksum: false,
            gzip: false,
        }
    }
}

impl BuildConfig {
    /// The data directory to load lists from.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let gopath = std::env::var_os(GOPATH_ENV).unwrap_or_default();
        detect_data_dir(&gopath)
    }
}

/// Find the first `GOPATH` entry that holds the domain-list data.
pub fn detect_data_dir(gopath: &OsStr) -> Result<PathBuf> {
    let mut searched = Vec::new();

    for root in std::env::split_paths(gopath) {
        if root.as_os_str().is_empty() {
            continue;
        }
        let candidate = root.join(Path::new(DATA_SUBDIR));
        if candidate.is_dir() {
            log::debug!("Using data directory {:?}", candidate);
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    Err(Error::DataDirNotFound(searched))
}
