//! Binary container format.
//!
//! The container is a protobuf `GeoSiteList`: one length-delimited `GeoSite`
//! message per group, each holding the group name and its matchers.
//!
//! # Wire Layout
//!
//! ```text
//! GeoSiteList
//!   1: repeated GeoSite
//!        1: string  country_code   (upper-cased group name)
//!        2: repeated Domain
//!             1: enum   type       (0=Plain/keyword, 1=Regex, 2=Domain/suffix, 3=Full)
//!             2: string value
//! ```
//!
//! A container may also be stored gzip compressed; the reader detects this
//! from the leading magic bytes.

mod format;
mod reader;
pub mod writer;


pub use format::*;
pub use reader::{decode, ContainerReader};
pub use writer::{checksum, checksum_path, write_atomic, ContainerWriter};

use crate::container::Container;
use crate::Result;

/// Serialize a container.
pub fn serialize(container: &Container) -> Result<Vec<u8>> {
    ContainerWriter::new().write(container)
}
