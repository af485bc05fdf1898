//! Source-format converters for domain lists.

mod text;

pub use text::{parse_entry, remove_comment, TextParser};
