use tower_lsp::jsonrpc::Result as LspResult;
use tower_lsp::lsp_types::*;

use crate::lsp::backend::Backend;
use crate::lsp::document::DocumentState;
use crate::lsp::position::{blank_at, blank_ranges, offset_at};
use crate::placeholder::Placeholder;
use crate::validation::engine::review_blanks;

/// Trait for handling hover requests
#[tower_lsp::async_trait]
pub trait HandleHover {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>>;
}

/// Trait for handling document symbols
#[tower_lsp::async_trait]
pub trait HandleDocumentSymbol {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>>;
}

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    fn create_document_state(&self, content: String) -> DocumentState;
    async fn publish_diagnostics(&self, uri: Url);
    fn create_lsp_diagnostic(
        &self,
        review_diagnostic: crate::validation::engine::Diagnostic,
        range: Range,
    ) -> tower_lsp::lsp_types::Diagnostic;
}

/// Markdown shown when hovering a blank
pub fn hover_markdown(blank: &Placeholder) -> String {
    let quoted: Vec<String> = blank
        .context
        .lines()
        .map(|line| format!("> {}", line))
        .collect();

    format!(
        "**Blank #{}** `{}`\n\n{}",
        blank.id,
        blank.raw_marker,
        quoted.join("\n")
    )
}

#[tower_lsp::async_trait]
impl HandleHover for Backend {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>> {
        let tdpp = params.text_document_position_params;
        let uri = tdpp.text_document.uri;
        let pos = tdpp.position;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let Some(offset) = offset_at(&doc_state.content, pos) else {
            return Ok(None);
        };
        let Some(blank) = blank_at(&doc_state.blanks, offset) else {
            return Ok(None);
        };

        let range = blank_ranges(&doc_state.content, std::slice::from_ref(blank))
            .into_iter()
            .next();

        Ok(Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: hover_markdown(blank),
            }),
            range,
        }))
    }
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Create a new document state, scanning for blanks
    fn create_document_state(&self, content: String) -> DocumentState {
        DocumentState::new(content, self.config.context_radius)
    }

    /// Publish one diagnostic per unfilled blank
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return,
        };

        let review = review_blanks(&doc_state.content, &doc_state.blanks);
        let ranges = blank_ranges(&doc_state.content, &doc_state.blanks);

        let diagnostics: Vec<_> = review
            .diagnostics
            .into_iter()
            .zip(ranges)
            .map(|(diagnostic, range)| self.create_lsp_diagnostic(diagnostic, range))
            .collect();
        drop(docs);

        log::debug!("publishing {} diagnostic(s) for {}", diagnostics.len(), uri);

        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }

    fn create_lsp_diagnostic(
        &self,
        review_diagnostic: crate::validation::engine::Diagnostic,
        range: Range,
    ) -> tower_lsp::lsp_types::Diagnostic {
        tower_lsp::lsp_types::Diagnostic::new(
            range,
            Some(DiagnosticSeverity::WARNING),
            Some(NumberOrString::String("unfilled-blank".to_string())),
            Some("draft-ls".to_string()),
            review_diagnostic.message,
            None,
            None,
        )
    }
}

#[tower_lsp::async_trait]
impl HandleDocumentSymbol for Backend {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let ranges = blank_ranges(&doc_state.content, &doc_state.blanks);
        let symbols = doc_state
            .blanks
            .iter()
            .zip(ranges)
            .map(|(blank, range)| blank_symbol(blank, range))
            .collect();

        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }
}

fn blank_symbol(blank: &Placeholder, range: Range) -> DocumentSymbol {
    DocumentSymbol {
        name: format!("Blank {}", blank.id),
        detail: Some(blank.context.clone()),
        kind: SymbolKind::FIELD,
        tags: None,
        #[allow(deprecated)]
        deprecated: Some(false), // Required by tower-lsp 0.20, use tags instead in future versions
        range,
        selection_range: range,
        children: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::scan;

    #[test]
    fn test_hover_markdown_quotes_every_context_line() {
        let blanks = scan("Name:\n____\nsigned");

        assert_eq!(
            hover_markdown(&blanks[0]),
            "**Blank #1** `____`\n\n> Name:\n> ____\n> signed"
        );
    }

    #[test]
    fn test_blank_symbol() {
        let text = "Witness: __witness__";
        let blanks = scan(text);
        let range = blank_ranges(text, &blanks)[0];

        let symbol = blank_symbol(&blanks[0], range);

        assert_eq!(symbol.name, "Blank 1");
        assert_eq!(symbol.kind, SymbolKind::FIELD);
        assert_eq!(symbol.detail.as_deref(), Some("Witness: __witness__"));
        assert_eq!(symbol.selection_range, range);
        assert_eq!(range.start, Position::new(0, 9));
    }
}
