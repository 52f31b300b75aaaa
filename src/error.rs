//! Error types for draft editing.

use thiserror::Error;

/// Errors raised while splicing answers into a draft
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// Offsets do not describe a valid range of the document
    #[error("offsets {start}..{end} are outside the document (length {len})")]
    OutOfRange { start: usize, end: usize, len: usize },

    /// A whitespace-only answer was rejected by the answer policy
    #[error("answer is empty")]
    EmptyAnswer,

    /// The placeholder was produced by a scan of different text
    #[error("blank #{id} no longer matches `{expected}` at its recorded offsets")]
    StaleMarker { id: usize, expected: String },

    /// An answer was submitted after every blank was filled
    #[error("all blanks have already been filled")]
    SessionComplete,
}

pub type Result<T> = std::result::Result<T, DraftError>;
