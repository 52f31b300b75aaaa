//! Conversion between character offsets and LSP positions.
//!
//! Blanks are located by character offset; LSP clients address text by
//! line and UTF-16 code unit.

use tower_lsp::lsp_types::{Position, Range};

use crate::placeholder::Placeholder;

/// Positions of ascending character `offsets`, computed in one pass
///
/// Offsets past the end of the text resolve to the end position.
pub fn positions_at<I>(text: &str, offsets: I) -> Vec<Position>
where
    I: IntoIterator<Item = usize>,
{
    let mut chars = text.chars();
    let mut offset = 0;
    let mut line = 0u32;
    let mut character = 0u32;

    offsets
        .into_iter()
        .map(|target| {
            while offset < target {
                match chars.next() {
                    Some('\n') => {
                        line += 1;
                        character = 0;
                    }
                    Some(c) => character += c.len_utf16() as u32,
                    None => break,
                }
                offset += 1;
            }
            Position::new(line, character)
        })
        .collect()
}

/// Editor ranges of `blanks`, which must come from a scan of `text`
pub fn blank_ranges(text: &str, blanks: &[Placeholder]) -> Vec<Range> {
    let offsets = blanks
        .iter()
        .flat_map(|blank| [blank.start_offset, blank.end_offset]);

    positions_at(text, offsets)
        .chunks_exact(2)
        .map(|pair| Range::new(pair[0], pair[1]))
        .collect()
}

/// Character offset of `position`, clamped to the end of its line
///
/// `None` when the line does not exist.
pub fn offset_at(text: &str, position: Position) -> Option<usize> {
    let mut chars = text.chars();
    let mut offset = 0;
    let mut line = 0;

    while line < position.line {
        if chars.next()? == '\n' {
            line += 1;
        }
        offset += 1;
    }

    let mut units = 0;
    while units < position.character {
        match chars.next() {
            Some('\n') | None => break,
            Some(c) => {
                units += c.len_utf16() as u32;
                offset += 1;
            }
        }
    }

    Some(offset)
}

/// Blank covering the character at `offset`
pub fn blank_at(blanks: &[Placeholder], offset: usize) -> Option<&Placeholder> {
    blanks
        .iter()
        .find(|blank| offset >= blank.start_offset && offset < blank.end_offset)
}
