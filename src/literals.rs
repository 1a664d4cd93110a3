//! String-literal heuristics shared by the extraction pass.
//!
//! These are pattern matchers, not parsers: false negatives are tolerated
//! and false positives are harmless because extra characters only ever
//! enlarge the glyph set.

use std::sync::LazyLock;

use regex::Regex;

/// Standard quoted literal, keeping backslash-escaped quotes inside the span.
static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\\]*(?:\\.[^"\\]*)*)""#).expect("quoted pattern"));

/// Any span between two quote characters; no escape handling, and the
/// delimiters may legally mismatch. See [`generic_quoted`].
static GENERIC_QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']([^"']+)["']"#).expect("generic pattern"));

/// Element text between a closing `>` and the next `<`.
static MARKUP_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">([^<]+)<").expect("markup pattern"));

/// Bodies of standard quoted string literals in source text.
pub(crate) fn quoted_strings(content: &str) -> Vec<&str> {
    QUOTED_RE
        .captures_iter(content)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .collect()
}

/// Bodies of raw string literals (`r"…"`, `r#"…"#`, `r##"…"##`, …).
///
/// The closing quote must be followed by as many `#` as the opener, so an
/// inner `"#` does not terminate an `r##"…"##` literal early. The first
/// qualifying closer wins and bodies may span newlines. This stands in for
/// the backreference pattern `r(#*)"(.*?)"\1`, which the regex crate cannot
/// express.
pub(crate) fn raw_strings(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'r' {
            i += 1;
            continue;
        }
        let mut j = i + 1;
        while j < bytes.len() && bytes[j] == b'#' {
            j += 1;
        }
        if j >= bytes.len() || bytes[j] != b'"' {
            i += 1;
            continue;
        }
        let hashes = j - i - 1;
        let body = j + 1;
        match find_raw_close(bytes, body, hashes) {
            Some(close) => {
                // `"` and `#` are ASCII, so these offsets sit on char boundaries.
                found.push(&content[body..close]);
                i = close + 1 + hashes;
            }
            // Unterminated literal; resume right after the `r` like the
            // regex engine would.
            None => i += 1,
        }
    }
    found
}

fn find_raw_close(bytes: &[u8], from: usize, hashes: usize) -> Option<usize> {
    let mut k = from;
    while k < bytes.len() {
        if bytes[k] == b'"' {
            let run = bytes.get(k + 1..k + 1 + hashes);
            if run.is_some_and(|run| run.iter().all(|&b| b == b'#')) {
                return Some(k);
            }
        }
        k += 1;
    }
    None
}

/// Spans between quote characters in generic web assets.
///
/// Deliberately simpler than [`quoted_strings`]: a backslash-escaped quote
/// terminates the match early, and `"abc'` counts as a span. Accepted
/// looseness for a glyph-collection heuristic.
pub(crate) fn generic_quoted(content: &str) -> Vec<&str> {
    GENERIC_QUOTED_RE
        .captures_iter(content)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()))
        .collect()
}

/// Visible-ish text between markup tags, trimmed of surrounding whitespace.
pub(crate) fn markup_text(content: &str) -> Vec<&str> {
    MARKUP_TEXT_RE
        .captures_iter(content)
        .map(|caps| caps.get(1).map_or("", |m| m.as_str()).trim())
        .collect()
}

/// Decode the common escape sequences so `"a\nb"` contributes `a`, newline,
/// `b` rather than a backslash and an `n`. The replacement order is fixed
/// and significant.
pub(crate) fn decode_escapes(text: &str) -> String {
    text.replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace("\\r", "\r")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\")
}
