//! Review Engine
//!
//! Turns the blanks of a draft into positioned diagnostics, independent of
//! how they are shown (editor, terminal).

use crate::placeholder::{scan, Placeholder};

/// An unfilled blank located by line and column
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based line
    pub line: usize,
    /// 0-based character column within the line
    pub column: usize,
    /// Span length in characters
    pub length: usize,
    pub message: String,
    /// Blank this diagnostic reports
    pub blank_id: usize,
}

/// Result of reviewing a draft
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// No diagnostics at all: every blank has been filled
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Review a draft, reporting one diagnostic per unfilled blank
pub fn review_document(content: &str) -> ValidationResult {
    review_blanks(content, &scan(content))
}

/// Report `blanks` (from a scan of `content`) as diagnostics
pub fn review_blanks(content: &str, blanks: &[Placeholder]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut cursor = LineCursor::default();
    let mut chars = content.chars();

    for blank in blanks {
        cursor.advance(&mut chars, blank.start_offset);
        result.diagnostics.push(Diagnostic {
            line: cursor.line,
            column: cursor.column,
            length: blank.len(),
            message: format!("Unfilled blank #{}: {}", blank.id, blank.raw_marker),
            blank_id: blank.id,
        });
    }

    result
}

/// Tracks line/column while walking forward through the text
#[derive(Debug)]
struct LineCursor {
    offset: usize,
    line: usize,
    column: usize,
}

impl Default for LineCursor {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 0,
        }
    }
}

impl LineCursor {
    fn advance(&mut self, chars: &mut std::str::Chars<'_>, target: usize) {
        while self.offset < target {
            let Some(ch) = chars.next() else {
                break;
            };
            self.offset += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }
}
