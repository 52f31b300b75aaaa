//! Draft Blanks
//!
//! Locating blank markers in draft text and filling them one at a time.
//! Pure text operations: no I/O, no shared state.

pub mod scanner;
pub mod splice;

pub use scanner::{
    context_around, scan, scan_with_radius, MarkerKind, Placeholder, DEFAULT_CONTEXT_RADIUS,
};
pub use splice::{replace, Document};
