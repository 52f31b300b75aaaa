use crate::placeholder::{scan_with_radius, Placeholder};

/// State for each open document
#[derive(Debug)]
pub struct DocumentState {
    pub content: String,
    pub blanks: Vec<Placeholder>, // Rescanned on every change, never patched
}

impl DocumentState {
    pub fn new(content: String, context_radius: usize) -> Self {
        let blanks = scan_with_radius(&content, context_radius);
        Self { content, blanks }
    }
}
