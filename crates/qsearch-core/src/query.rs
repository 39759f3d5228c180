//! Inline tag extraction for raw search queries

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Non-greedy so `[a] and [b]` captures only `a`
    static ref TAG_PATTERN: Regex = Regex::new(r"\[(.*?)\]").unwrap();
}

/// A raw query split into free text and an optional tag filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedQuery {
    /// Query text with the tag token removed
    pub text: String,
    /// Contents of the first `[...]` token, verbatim (may be empty)
    pub tag: Option<String>,
}

impl ParsedQuery {
    /// Query text with no tag, as used by title lookups
    pub fn untagged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: None,
        }
    }
}

/// Parse a raw query string.
///
/// Only the first bracketed token is treated as a tag; any later bracket text
/// stays in the query. When a tag is found the matched token is removed once,
/// the whitespace around it collapses to a single separator and the result is
/// trimmed. Without a tag the input is returned untouched, whitespace included.
pub fn parse_query(raw: &str) -> ParsedQuery {
    let Some(captures) = TAG_PATTERN.captures(raw) else {
        return ParsedQuery::untagged(raw);
    };
    let (Some(token), Some(inner)) = (captures.get(0), captures.get(1)) else {
        return ParsedQuery::untagged(raw);
    };

    let before = &raw[..token.start()];
    let after = &raw[token.end()..];

    ParsedQuery {
        text: join_around_token(before, after),
        tag: Some(inner.as_str().to_string()),
    }
}

fn join_around_token(before: &str, after: &str) -> String {
    let spaced = before.ends_with(char::is_whitespace) || after.starts_with(char::is_whitespace);
    let before = before.trim();
    let after = after.trim();

    match (before.is_empty(), after.is_empty()) {
        (true, _) => after.to_string(),
        (_, true) => before.to_string(),
        _ if spaced => format!("{before} {after}"),
        _ => format!("{before}{after}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_in_middle() {
        let parsed = parse_query("how to parse [csharp] strings");
        assert_eq!(parsed.text, "how to parse strings");
        assert_eq!(parsed.tag.as_deref(), Some("csharp"));
    }

    #[test]
    fn test_empty_query() {
        let parsed = parse_query("");
        assert_eq!(parsed, ParsedQuery::default());
    }

    #[test]
    fn test_no_tag_keeps_whitespace() {
        let parsed = parse_query("  padded query  ");
        assert_eq!(parsed.text, "  padded query  ");
        assert!(parsed.tag.is_none());
    }

    #[test]
    fn test_empty_brackets_yield_empty_tag() {
        let parsed = parse_query("rust []");
        assert_eq!(parsed.text, "rust");
        assert_eq!(parsed.tag.as_deref(), Some(""));
    }

    #[test]
    fn test_only_first_tag_extracted() {
        let parsed = parse_query("[rust] lifetimes [async]");
        assert_eq!(parsed.tag.as_deref(), Some("rust"));
        assert_eq!(parsed.text, "lifetimes [async]");
    }

    #[test]
    fn test_repeated_token_removed_once() {
        let parsed = parse_query("[go] channels [go]");
        assert_eq!(parsed.tag.as_deref(), Some("go"));
        assert_eq!(parsed.text, "channels [go]");
    }

    #[test]
    fn test_unclosed_bracket_is_not_a_tag() {
        let parsed = parse_query("array[0 access");
        assert!(parsed.tag.is_none());
        assert_eq!(parsed.text, "array[0 access");
    }

    #[test]
    fn test_tag_only_query() {
        let parsed = parse_query("  [docker]  ");
        assert_eq!(parsed.text, "");
        assert_eq!(parsed.tag.as_deref(), Some("docker"));
    }

    #[test]
    fn test_glued_token_does_not_insert_space() {
        let parsed = parse_query("vec[i32]len");
        assert_eq!(parsed.tag.as_deref(), Some("i32"));
        assert_eq!(parsed.text, "veclen");
    }
}
