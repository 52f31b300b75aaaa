//! Draft Blanks
//!
//! Finds the blank placeholders in a legal draft and fills them one at a
//! time.
//!
//! This library provides:
//! - Blank scanning and answer splicing
//! - A sequential fill session with a chat-style transcript
//! - Layout of structured (JSON) drafts
//! - A language server showing blanks in an editor
//! - Configuration management

pub mod cli;
pub mod config;
pub mod error;
pub mod lsp;
pub mod placeholder;
pub mod render;
pub mod session;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use error::DraftError;
pub use placeholder::{replace, scan, Document, Placeholder};
pub use render::render_legal_document;
pub use session::{FillSession, Step};
pub use validation::{review_document, Diagnostic};
