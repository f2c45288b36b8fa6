//! Parser for `.env`-style source text.
//!
//! Responsibilities:
//! - Turn raw source text into an `EnvMap` of key/value pairs.
//! - Honor `export` prefixes, `=`/`:` separators, single/double/backtick
//!   quoting, and trailing `#` comments on unquoted values.
//! - Expand `\n`/`\r` escape sequences inside double-quoted values.
//!
//! Does NOT handle:
//! - File I/O or path resolution (see `reader.rs` and `loader/`).
//! - Merging of multiple sources (see `loader/pipeline.rs`).
//! - Variable interpolation/expansion of any kind.
//!
//! Invariants / Assumptions:
//! - The scan is a single multiline-aware pass over the whole text, so a
//!   quoted value may span several lines.
//! - Lines that do not match the grammar contribute nothing; they are not
//!   errors.
//! - Duplicate keys within one parse: the later match wins.
//! - A bare `KEY` or a trailing `KEY=` maps to the empty string, not to an
//!   absent key.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Parsed environment mapping: variable name to string value.
pub type EnvMap = BTreeMap<String, String>;

/// One declaration: optional `export`, a `[\w.-]+` key, an optional `=`/`:`
/// separator with an optional quoted or unquoted value, and an optional
/// trailing comment. Quoted spans admit escaped quotes and embedded newlines,
/// which is why the scan runs over the whole text instead of per line.
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?m)^[ \t]*(?:export[ \t]+)?([\w.-]+)(?:[ \t]*[=:]([ \t]*'(?:\\'|[^'])*'|[ \t]*"(?:\\"|[^"])*"|[ \t]*`(?:\\`|[^`])*`|[^#\r\n]+)?)?[ \t]*(?:#.*)?$"#,
    )
    .expect("valid regex")
});

/// Parse `.env`-style source text into an [`EnvMap`].
///
/// Later declarations of the same key overwrite earlier ones. Unmatched
/// lines are skipped silently.
pub fn parse_str(text: &str) -> EnvMap {
    let normalized = normalize_newlines(text);
    let mut entries = EnvMap::new();
    for captures in DECLARATION.captures_iter(&normalized) {
        let key = captures[1].to_string();
        let value = captures
            .get(2)
            .map(|m| clean_value(m.as_str()))
            .unwrap_or_default();
        entries.insert(key, value);
    }
    entries
}

/// Decode `bytes` with `encoding` (lossily on malformed sequences) and parse
/// the result.
pub fn parse_bytes(bytes: &[u8], encoding: &'static encoding_rs::Encoding) -> EnvMap {
    let (text, _, _) = encoding.decode(bytes);
    parse_str(&text)
}

/// Normalize `\r\n` and bare `\r` line endings to `\n` before scanning.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Trim the raw value, strip one matching pair of outer quotes, and expand
/// `\n`/`\r` escapes inside double-quoted values. Single- and backtick-quoted
/// values are returned without escape expansion.
fn clean_value(raw: &str) -> String {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if first == bytes[bytes.len() - 1] && matches!(first, b'\'' | b'"' | b'`') {
            let inner = &trimmed[1..trimmed.len() - 1];
            if first == b'"' {
                return inner.replace("\\n", "\n").replace("\\r", "\r");
            }
            return inner.to_string();
        }
    }
    trimmed.to_string()
}
