//! Blank Scanner
//!
//! Single left-to-right pass over draft text collecting blank markers,
//! their character offsets and the text around them.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Characters of surrounding text kept on each side of a blank
pub const DEFAULT_CONTEXT_RADIUS: usize = 100;

// Leftmost-first: a bare run of three or more underscores wins over a
// `__token__` starting at the same position.
static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{3,}|__[^_\n]*__").expect("marker pattern compiles"));

/// Which marker syntax produced a blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// Three or more underscores, e.g. `_____`
    Run,
    /// Underscore-delimited token, e.g. `__name__`
    Token,
}

impl MarkerKind {
    fn of(marker: &str) -> Self {
        if marker.chars().all(|c| c == '_') {
            MarkerKind::Run
        } else {
            MarkerKind::Token
        }
    }
}

/// A blank found by a scan
///
/// Offsets are character (not byte) indices into the exact text that was
/// scanned. They are invalidated by any edit of that text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    /// 1-based position among the blanks of this scan
    pub id: usize,
    pub raw_marker: String,
    pub kind: MarkerKind,
    /// Trimmed excerpt around the blank, the blank included
    pub context: String,
    pub start_offset: usize,
    pub end_offset: usize,
}

impl Placeholder {
    /// Length of the marker in characters
    pub fn len(&self) -> usize {
        self.end_offset.saturating_sub(self.start_offset)
    }

    pub fn is_empty(&self) -> bool {
        self.start_offset == self.end_offset
    }
}

/// Scan `text` for blanks using the default context radius
pub fn scan(text: &str) -> Vec<Placeholder> {
    scan_with_radius(text, DEFAULT_CONTEXT_RADIUS)
}

/// Scan `text` for blanks, keeping up to `radius` characters of context on
/// each side of every marker
pub fn scan_with_radius(text: &str, radius: usize) -> Vec<Placeholder> {
    let mut placeholders = Vec::new();

    // Char offsets are accumulated between matches so the scan stays linear
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for found in MARKER_PATTERN.find_iter(text) {
        char_cursor += text[byte_cursor..found.start()].chars().count();

        let marker = found.as_str();
        let start_offset = char_cursor;
        let end_offset = start_offset + marker.chars().count();

        char_cursor = end_offset;
        byte_cursor = found.end();

        placeholders.push(Placeholder {
            id: placeholders.len() + 1,
            raw_marker: marker.to_string(),
            kind: MarkerKind::of(marker),
            context: context_around(text, found.start(), found.end(), radius),
            start_offset,
            end_offset,
        });
    }

    log::trace!("scan found {} blank(s)", placeholders.len());
    placeholders
}

/// Excerpt of `text` spanning `radius` characters either side of the byte
/// range `start..end`, clamped to the text bounds and trimmed
///
/// An empty, out-of-bounds or non-char-boundary range yields an empty
/// string.
pub fn context_around(text: &str, start: usize, end: usize, radius: usize) -> String {
    if start >= end || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
        return String::new();
    }

    let lower = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(idx, _)| idx);

    let upper = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(idx, _)| end + idx);

    text[lower..upper].trim().to_string()
}
