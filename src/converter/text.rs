//! Domain-list text format parser.
//!
//! One rule per line, `tag:value` or a bare value (implicitly `domain`).
//! Everything after `#` is a comment.

use std::io::{BufRead, BufReader, Read};

use crate::entry::{normalize_name, RawEntry, RawList};
use crate::{Error, Result, RuleKind};

/// Domain-list text format parser.
pub struct TextParser;

impl TextParser {
    /// Parse one list from a reader.
    ///
    /// Lines are scanned as bytes, so comments may hold any encoding. The
    /// rule part of a line must be UTF-8.
    pub fn parse<R: Read>(name: &str, reader: R) -> Result<RawList> {
        let name = normalize_name(name);
        let mut entries = Vec::new();
        let mut buf_reader = BufReader::new(reader);
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if buf_reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            let bytes = remove_comment(&buf);
            let malformed = || Error::MalformedEntryLine {
                list: name.clone(),
                line_number,
                line: String::from_utf8_lossy(bytes).into_owned(),
            };

            let line = std::str::from_utf8(bytes).map_err(|_| malformed())?.trim();
            if line.is_empty() {
                continue;
            }

            entries.push(parse_entry(line).ok_or_else(malformed)?);
        }

        Ok(RawList { name, entries })
    }
}

/// Strip a trailing `#` comment and surrounding ASCII whitespace.
pub fn remove_comment(line: &[u8]) -> &[u8] {
    let content = match line.iter().position(|&b| b == b'#') {
        Some(idx) => &line[..idx],
        None => line,
    };
    content.trim_ascii()
}

/// Split a line into a `(tag, value)` pair.
///
/// Returns `None` when the line holds more than one `:`.
pub fn parse_entry(line: &str) -> Option<RawEntry> {
    let parts: Vec<&str> = line.split(':').collect();
    match parts.as_slice() {
        [value] => Some(RawEntry::new(RuleKind::Domain.as_str(), *value)),
        [tag, value] => Some(RawEntry::new(tag.to_lowercase(), value.to_lowercase())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_list() {
        let text = r#"
# Comment
google.com
full:www.Google.com  # trailing comment
KEYWORD:google

include:youtube
"#;

        let list = TextParser::parse("google", text.as_bytes()).unwrap();

        assert_eq!(list.name, "GOOGLE");
        assert_eq!(
            list.entries,
            vec![
                RawEntry::new("domain", "google.com"),
                RawEntry::new("full", "www.google.com"),
                RawEntry::new("keyword", "google"),
                RawEntry::new("include", "youtube"),
            ]
        );
    }

    #[test]
    fn test_bare_value_is_kept_verbatim() {
        assert_eq!(parse_entry("Example.COM"), Some(RawEntry::domain("Example.COM")));
    }

    #[test]
    fn test_unknown_tag_survives_parsing() {
        assert_eq!(parse_entry("bogus:x"), Some(RawEntry::new("bogus", "x")));
    }

    #[test]
    fn test_too_many_separators() {
        assert_eq!(parse_entry("regex:^a:b$"), None);

        let err = TextParser::parse("ads", "ok.com\n\nregex:^a:b$\n".as_bytes()).unwrap_err();
        match err {
            Error::MalformedEntryLine {
                list,
                line_number,
                line,
            } => {
                assert_eq!(list, "ADS");
                assert_eq!(line_number, 3);
                assert_eq!(line, "regex:^a:b$");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_remove_comment() {
        assert_eq!(remove_comment(b"  a.com  # note"), b"a.com");
        assert_eq!(remove_comment(b"# only a comment"), b"");
        assert_eq!(remove_comment(b"  b.com \r\n"), b"b.com");
    }

    #[test]
    fn test_non_utf8_comment_is_ignored() {
        let list = TextParser::parse("x", &b"a.com # caf\xe9\n# \xff\xfe\nb.com\n"[..]).unwrap();

        assert_eq!(
            list.entries,
            vec![RawEntry::domain("a.com"), RawEntry::domain("b.com")]
        );
    }

    #[test]
    fn test_non_utf8_rule_is_malformed() {
        let err = TextParser::parse("x", &b"a.com\nfull:caf\xe9.com\n"[..]).unwrap_err();

        match err {
            Error::MalformedEntryLine {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "full:caf\u{fffd}.com");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_crlf_and_missing_trailing_newline() {
        let list = TextParser::parse("x", &b"a.com\r\nfull:b.com"[..]).unwrap();

        assert_eq!(
            list.entries,
            vec![RawEntry::domain("a.com"), RawEntry::new("full", "b.com")]
        );
    }
}
