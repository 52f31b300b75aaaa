//! Answer Splicing
//!
//! Replaces one blank at a time. Every edit yields a new text value; the
//! caller re-scans it before touching the next blank.

use std::fmt;

use crate::error::{DraftError, Result};
use crate::placeholder::scanner::{scan_with_radius, Placeholder, DEFAULT_CONTEXT_RADIUS};

/// Splice `value` into `document` in place of `placeholder`
///
/// The placeholder must come from a scan of this exact `document`. Only the
/// offsets are checked; `value` is inserted verbatim, even when it contains
/// marker syntax of its own.
pub fn replace(document: &str, placeholder: &Placeholder, value: &str) -> Result<String> {
    let (start, end) = byte_range(document, placeholder.start_offset, placeholder.end_offset)?;

    let mut updated = String::with_capacity(document.len() - (end - start) + value.len());
    updated.push_str(&document[..start]);
    updated.push_str(value);
    updated.push_str(&document[end..]);

    Ok(updated)
}

/// Byte index of the character at `offset`; the character count itself maps
/// to `text.len()`
pub(crate) fn byte_offset(text: &str, offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .nth(offset)
}

fn byte_range(text: &str, start: usize, end: usize) -> Result<(usize, usize)> {
    let out_of_range = || DraftError::OutOfRange {
        start,
        end,
        len: text.chars().count(),
    };

    if start > end {
        return Err(out_of_range());
    }

    let start_byte = byte_offset(text, start).ok_or_else(out_of_range)?;
    let end_byte = byte_offset(&text[start_byte..], end - start)
        .map(|idx| start_byte + idx)
        .ok_or_else(out_of_range)?;

    Ok((start_byte, end_byte))
}

/// Draft text under edit
///
/// Edits never happen in place: [`Document::replace`] returns the next
/// document value and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    context_radius: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }

    /// Use `radius` characters of context for blanks found in this document
    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn context_radius(&self) -> usize {
        self.context_radius
    }

    /// Fresh scan of the current text
    pub fn placeholders(&self) -> Vec<Placeholder> {
        scan_with_radius(&self.text, self.context_radius)
    }

    /// True once no blank remains
    pub fn is_complete(&self) -> bool {
        self.placeholders().is_empty()
    }

    /// Fill `placeholder` with `value`, producing the next document
    ///
    /// Unlike the free [`replace`], this also refuses a placeholder whose
    /// marker is no longer found at its offsets.
    pub fn replace(&self, placeholder: &Placeholder, value: &str) -> Result<Document> {
        let (start, end) =
            byte_range(&self.text, placeholder.start_offset, placeholder.end_offset)?;

        if self.text[start..end] != placeholder.raw_marker {
            return Err(DraftError::StaleMarker {
                id: placeholder.id,
                expected: placeholder.raw_marker.clone(),
            });
        }

        log::debug!(
            "filling blank #{} at {}..{} with {} char(s)",
            placeholder.id,
            placeholder.start_offset,
            placeholder.end_offset,
            value.chars().count()
        );

        Ok(Document {
            text: replace(&self.text, placeholder, value)?,
            context_radius: self.context_radius,
        })
    }
}

impl From<String> for Document {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
