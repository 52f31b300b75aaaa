//! LSP Protocol Implementation
//!
//! Shows the blanks of open drafts in an editor: diagnostics, hover with
//! context, and a symbol per blank.

pub mod backend;
pub mod document;
pub mod handlers;
pub mod position;
pub mod server;

pub use backend::Backend;
