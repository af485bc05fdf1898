//! Error types for dlc.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for dlc operations.
///
/// Every variant aborts the whole build: a half-resolved routing table is
/// never written.
#[derive(Error, Debug)]
pub enum Error {
    /// Rule tag that does not map to any matcher kind
    #[error("unknown domain type: {0}")]
    UnknownRuleKind(String),

    /// List requested for resolution that is not in the registry
    #[error("list not found: {0}")]
    ListNotFound(String),

    /// Include referencing a list absent from the registry
    #[error("included list not found: {name} (referenced from {from})")]
    UnresolvedInclude { name: String, from: String },

    /// Include chain that revisits one of its own ancestors
    #[error("circular inclusion: {}", .0.join(" -> "))]
    CircularInclusion(Vec<String>),

    /// Line that could not be split into a `(tag, value)` pair
    #[error("invalid format in {list} line {line_number}: {line}")]
    MalformedEntryLine {
        list: String,
        line_number: usize,
        line: String,
    },

    /// Source file whose name is not valid UTF-8
    #[error("list file name is not valid UTF-8: {0:?}")]
    InvalidListName(PathBuf),

    /// No source data directory could be located
    #[error("data directory not found (searched: {})", display_paths(.0))]
    DataDirNotFound(Vec<PathBuf>),

    /// Regex rule that does not compile
    #[error("invalid regex in group {group}: {source}")]
    InvalidRegex {
        group: String,
        #[source]
        source: regex::Error,
    },

    /// Container bytes that do not decode
    #[error("decode error: {0}")]
    Decode(String),

    /// Container that does not encode
    #[error("encode error: {0}")]
    Encode(#[from] prost::EncodeError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<prost::DecodeError> for Error {
    fn from(e: prost::DecodeError) -> Self {
        Error::Decode(e.to_string())
    }
}

impl From<walkdir::Error> for Error {
    fn from(e: walkdir::Error) -> Self {
        Error::Io(e.into())
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for dlc operations.
pub type Result<T> = std::result::Result<T, Error>;
