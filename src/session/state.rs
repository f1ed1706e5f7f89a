// file: src/session/state.rs
// description: in-memory session state: backend url, known documents, selection
// reference: append-only document set with first-wins selection

use crate::config::DEFAULT_BACKEND_URL;
use crate::error::{ClientError, Result};
use crate::models::DocumentRef;
use crate::session::resolve::{normalize_whitespace, resolve_doc_id};
use crate::utils::Validator;
use std::collections::HashSet;

/// Value shown for the empty picker choice.
pub const PICKER_NONE: &str = "none";

#[derive(Debug, Clone)]
pub struct SessionState {
    backend_url: String,
    documents: Vec<DocumentRef>,
    known_ids: HashSet<String>,
    /// Free-text docId; auto-filled by the first upload.
    selected_doc_id: String,
    /// Document chosen from the picker, if any.
    picked_doc_id: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl SessionState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            documents: Vec::new(),
            known_ids: HashSet::new(),
            selected_doc_id: String::new(),
            picked_doc_id: None,
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn set_backend_url(&mut self, url: &str) -> Result<()> {
        Validator::validate_url(url)?;
        self.backend_url = url.trim().to_string();
        Ok(())
    }

    pub fn documents(&self) -> &[DocumentRef] {
        &self.documents
    }

    pub fn contains(&self, doc_id: &str) -> bool {
        self.known_ids.contains(doc_id)
    }

    pub fn selected_doc_id(&self) -> &str {
        &self.selected_doc_id
    }

    pub fn set_selected_doc_id(&mut self, doc_id: impl Into<String>) {
        self.selected_doc_id = doc_id.into();
    }

    pub fn picked_doc_id(&self) -> Option<&str> {
        self.picked_doc_id.as_deref()
    }

    /// Picker labels: `none` followed by one entry per known document.
    pub fn picker_labels(&self) -> Vec<String> {
        std::iter::once(PICKER_NONE.to_string())
            .chain(self.documents.iter().map(DocumentRef::picker_label))
            .collect()
    }

    /// Selects a picker entry by its position in `picker_labels`; 0 is `none`.
    pub fn pick(&mut self, index: usize) -> Result<()> {
        if index == 0 {
            self.picked_doc_id = None;
            return Ok(());
        }

        let document = self.documents.get(index - 1).ok_or_else(|| {
            ClientError::Validation(format!(
                "No document at position {} (known: {})",
                index,
                self.documents.len()
            ))
        })?;

        self.picked_doc_id = Some(document.doc_id.clone());
        Ok(())
    }

    /// docId to send with the next question, if any.
    pub fn effective_doc_id(&self) -> Option<String> {
        resolve_doc_id(Some(&self.selected_doc_id), self.picked_doc_id.as_deref())
    }

    /// Appends unseen documents in order and returns the ones added. When no
    /// document is selected, the first added one becomes the selection.
    pub fn merge_documents(&mut self, incoming: &[DocumentRef]) -> Vec<DocumentRef> {
        let mut added = Vec::new();

        for document in incoming {
            if self.known_ids.insert(document.doc_id.clone()) {
                self.documents.push(document.clone());
                added.push(document.clone());
            }
        }

        if normalize_whitespace(Some(&self.selected_doc_id)).is_empty() {
            if let Some(first) = added.first() {
                self.selected_doc_id = first.doc_id.clone();
            }
        }

        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(id: &str, name: &str) -> DocumentRef {
        DocumentRef::new(id, name)
    }

    #[test]
    fn test_new_session_is_empty() {
        let state = SessionState::default();

        assert_eq!(state.backend_url(), "http://backend:3001");
        assert!(state.documents().is_empty());
        assert_eq!(state.selected_doc_id(), "");
        assert_eq!(state.effective_doc_id(), None);
        assert_eq!(state.picker_labels(), vec!["none".to_string()]);
    }

    #[test]
    fn test_merge_selects_first_document_of_empty_session() {
        let mut state = SessionState::default();

        let added = state.merge_documents(&[doc("d1", "a.pdf"), doc("d2", "PDF")]);

        assert_eq!(added.len(), 2);
        assert_eq!(state.documents(), &[doc("d1", "a.pdf"), doc("d2", "PDF")]);
        assert_eq!(state.selected_doc_id(), "d1");
    }

    #[test]
    fn test_merge_appends_and_skips_known_ids() {
        let mut state = SessionState::default();
        state.merge_documents(&[doc("d1", "a.pdf")]);

        let added = state.merge_documents(&[
            doc("d2", "b.pdf"),
            doc("d1", "renamed.pdf"),
            doc("d3", "c.pdf"),
            doc("d2", "again.pdf"),
        ]);

        assert_eq!(added, vec![doc("d2", "b.pdf"), doc("d3", "c.pdf")]);
        assert_eq!(
            state.documents(),
            &[doc("d1", "a.pdf"), doc("d2", "b.pdf"), doc("d3", "c.pdf")]
        );
        assert_eq!(state.selected_doc_id(), "d1");
    }

    #[test]
    fn test_merge_without_documents_keeps_selection() {
        let mut state = SessionState::default();
        state.merge_documents(&[]);
        assert_eq!(state.selected_doc_id(), "");

        state.set_selected_doc_id("custom");
        state.merge_documents(&[doc("d9", "z.pdf")]);
        assert_eq!(state.selected_doc_id(), "custom");
    }

    #[test]
    fn test_merge_fills_cleared_selection_with_first_new_document() {
        let mut state = SessionState::default();
        state.merge_documents(&[doc("d1", "a.pdf")]);
        state.set_selected_doc_id("   ");

        state.merge_documents(&[doc("d1", "a.pdf"), doc("d2", "b.pdf")]);

        assert_eq!(state.selected_doc_id(), "d2");
    }

    #[test]
    fn test_picker() {
        let mut state = SessionState::default();
        state.merge_documents(&[doc("d1", "a.pdf"), doc("d2", "b.pdf")]);

        assert_eq!(
            state.picker_labels(),
            vec!["none".to_string(), "a.pdf d1".to_string(), "b.pdf d2".to_string()]
        );

        state.pick(2).unwrap();
        assert_eq!(state.picked_doc_id(), Some("d2"));

        state.pick(0).unwrap();
        assert_eq!(state.picked_doc_id(), None);

        assert!(state.pick(3).is_err());
    }

    #[test]
    fn test_effective_doc_id_prefers_text_over_picker() {
        let mut state = SessionState::default();
        state.merge_documents(&[doc("d1", "a.pdf"), doc("d2", "b.pdf")]);
        state.pick(2).unwrap();

        assert_eq!(state.effective_doc_id(), Some("d1".to_string()));

        state.set_selected_doc_id(" ");
        assert_eq!(state.effective_doc_id(), Some("d2".to_string()));

        state.set_selected_doc_id("  other   id ");
        assert_eq!(state.effective_doc_id(), Some("other id".to_string()));
    }

    #[test]
    fn test_set_backend_url() {
        let mut state = SessionState::default();

        state.set_backend_url(" http://localhost:3001 ").unwrap();
        assert_eq!(state.backend_url(), "http://localhost:3001");

        assert!(state.set_backend_url("localhost").is_err());
        assert_eq!(state.backend_url(), "http://localhost:3001");
    }
}
