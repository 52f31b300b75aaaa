//! Draft Review
//!
//! Completeness checks separated from scanning and LSP concerns.

pub mod engine;

pub use engine::{review_blanks, review_document, Diagnostic};

// Re-export common types
pub use engine::ValidationResult;
