// file: src/session/client.rs
// description: session client mediating uploads and questions against the backend
// reference: state is only touched after a call fully succeeds

use crate::client::BackendClient;
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::models::{AnswerResult, PdfFile, UploadOutcome, pick_documents};
use crate::session::resolve::normalize_whitespace;
use crate::session::state::SessionState;
use crate::utils::Validator;
use tracing::{debug, info};

pub struct SessionClient {
    backend: BackendClient,
    state: SessionState,
}

impl SessionClient {
    pub fn new(backend: BackendClient, state: SessionState) -> Self {
        Self { backend, state }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let backend = BackendClient::from_config(&config.backend)?;
        let mut state = SessionState::default();
        state.set_backend_url(&config.backend.url)?;
        Ok(Self::new(backend, state))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// Uploads `files` and merges the documents the backend reports into the
    /// session. On any failure the session is left untouched.
    pub async fn upload_documents(&mut self, files: &[PdfFile]) -> Result<UploadOutcome> {
        if files.is_empty() {
            return Err(ClientError::Validation("No files to upload".to_string()));
        }

        info!("Uploading {} file(s)", files.len());

        let response = self
            .backend
            .upload_documents(self.state.backend_url(), files)
            .await?;

        let documents = pick_documents(&response);
        let added = self.state.merge_documents(&documents);

        info!(
            "Upload done: {} document(s) listed, {} new",
            documents.len(),
            added.len()
        );

        Ok(UploadOutcome {
            response,
            documents,
            added,
        })
    }

    /// Asks `question`, restricted to `doc_id` when one is given.
    pub async fn ask_question(&self, question: &str, doc_id: Option<&str>) -> Result<AnswerResult> {
        Validator::validate_question(question)?;

        let question = question.trim();
        let doc_id = doc_id
            .map(|id| normalize_whitespace(Some(id)))
            .filter(|id| !id.is_empty());

        info!("Asking question (docId: {})", doc_id.as_deref().unwrap_or("all"));

        let raw = self
            .backend
            .ask_question(self.state.backend_url(), question, doc_id.as_deref())
            .await?;

        let result = AnswerResult::from_value(raw)?;
        debug!("Answer received with {} source(s)", result.sources.len());
        Ok(result)
    }

    /// Asks `question` using the session's override text and picker choice.
    pub async fn ask(&self, question: &str) -> Result<AnswerResult> {
        let doc_id = self.state.effective_doc_id();
        self.ask_question(question, doc_id.as_deref()).await
    }
}
