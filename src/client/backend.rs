// file: src/client/backend.rs
// description: HTTP client for the document question-answering backend
// reference: POST /api/documents (multipart) and POST /api/question (json)

use crate::config::BackendConfig;
use crate::error::{ClientError, Result};
use crate::models::PdfFile;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const DOCUMENTS_PATH: &str = "/api/documents";
pub const QUESTION_PATH: &str = "/api/question";
pub const PDF_MIME: &str = "application/pdf";

/// Multipart field repeated once per uploaded file.
const FILES_FIELD: &str = "files";

#[derive(Debug, Serialize)]
struct QuestionRequest<'a> {
    question: &'a str,
    #[serde(rename = "docId", skip_serializing_if = "Option::is_none")]
    doc_id: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    timeout: Duration,
}

impl BackendClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(config.timeout())
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins `path` onto `base_url`, dropping any trailing slashes first.
    pub fn endpoint(base_url: &str, path: &str) -> String {
        format!("{}{}", base_url.trim().trim_end_matches('/'), path)
    }

    /// Sends every file as a `files` part and returns the backend's JSON reply.
    pub async fn upload_documents(&self, base_url: &str, files: &[PdfFile]) -> Result<Value> {
        let url = Self::endpoint(base_url, DOCUMENTS_PATH);

        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.name.clone())
                .mime_str(PDF_MIME)
                .map_err(|e| ClientError::TransportFailed(format!("Invalid part type: {}", e)))?;
            form = form.part(FILES_FIELD, part);
        }

        debug!(
            "Uploading {} file(s), {} bytes total, to {}",
            files.len(),
            files.iter().map(PdfFile::len).sum::<usize>(),
            url
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error("upload", &e))?;

        read_json(response).await
    }

    /// Posts a question. `docId` is only put on the wire when `doc_id` is a
    /// non-empty string; otherwise the key is absent from the body.
    pub async fn ask_question(
        &self,
        base_url: &str,
        question: &str,
        doc_id: Option<&str>,
    ) -> Result<Value> {
        let url = Self::endpoint(base_url, QUESTION_PATH);

        let request = QuestionRequest {
            question,
            doc_id: doc_id.filter(|id| !id.is_empty()),
        };

        debug!(
            "Asking {} ({} chars, docId: {:?})",
            url,
            question.len(),
            request.doc_id
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error("question", &e))?;

        read_json(response).await
    }
}

fn transport_error(operation: &str, err: &reqwest::Error) -> ClientError {
    let message = if err.is_timeout() {
        format!("{} request timed out: {}", operation, err)
    } else if err.is_connect() {
        format!("Failed to connect for {} request: {}", operation, err)
    } else {
        format!("Failed to send {} request: {}", operation, err)
    };
    warn!("{}", message);
    ClientError::TransportFailed(message)
}

async fn read_json(response: Response) -> Result<Value> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("Backend returned status {}", status);
        return Err(ClientError::RequestFailed {
            status: status.as_u16(),
            body,
        });
    }

    response.json::<Value>().await.map_err(|e| {
        warn!("Failed to decode backend response: {}", e);
        ClientError::TransportFailed(format!("Failed to decode backend response: {}", e))
    })
}
