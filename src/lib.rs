//! dlc - compiles domain lists into a binary GeoSite container.
//!
//! Source data is a directory of line-oriented text files, one named list
//! per file. Lines are `tag:value` rules (`domain`, `full`, `keyword`,
//! `regex`) or `include:NAME` references to other lists. The compiler
//! flattens every list's includes, classifies the rules, and writes one
//! protobuf `GeoSiteList` that a traffic router loads at runtime.
//!
//! # Quick Start
//!
//! ```ignore
//! use dlc::{binary, Container, Registry};
//! use std::path::Path;
//!
//! let registry = Registry::load_dir(Path::new("data"))?;
//! let container = Container::build(&registry)?;
//! let bytes = binary::serialize(&container)?;
//! std::fs::write("dlc.dat", bytes)?;
//! ```
//!
//! # Pipeline
//!
//! 1. [`Registry`]: raw lists keyed by upper-cased file name
//! 2. [`Resolver`]: depth-first include expansion with cycle detection
//! 3. [`classify`]: tag to [`Matcher`] mapping, unknown tags are errors
//! 4. [`Container`]: one [`SiteGroup`] per list, sorted by name
//! 5. [`binary::ContainerWriter`]: protobuf encoding
//!
//! Every step fails the whole build on the first error.

mod entry;
mod error;
mod matcher;
mod rule_type;

pub mod binary;
pub mod config;
pub mod container;
pub mod converter;
pub mod pipeline;
pub mod registry;
pub mod resolver;
pub mod rule;

// Re-export core types
pub use entry::{normalize_name, RawEntry, RawList, ResolvedList};
pub use error::{Error, Result};
pub use matcher::{classify, Matcher};
pub use rule_type::RuleKind;

pub use config::BuildConfig;
pub use container::{build, Container, SiteGroup};
pub use pipeline::{run, BuildSummary};
pub use registry::Registry;
pub use resolver::{resolve, Resolver};
pub use rule::{CompiledContainer, CompiledGroup};
