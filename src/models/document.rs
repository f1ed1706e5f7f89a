// file: src/models/document.rs
// description: uploaded document references and pdf payloads
// reference: backend upload contract (POST /api/documents)

use crate::error::{ClientError, Result};
use crate::utils::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Label used when the backend does not report an original file name.
pub const FALLBACK_FILENAME: &str = "PDF";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    #[serde(rename = "docId")]
    pub doc_id: String,
    pub filename: String,
}

impl DocumentRef {
    pub fn new(doc_id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            filename: filename.into(),
        }
    }

    /// Label shown in the document picker.
    pub fn picker_label(&self) -> String {
        format!("{} {}", self.filename, self.doc_id)
    }

    /// Builds a reference from one entry of the upload response's `files`
    /// list. Non-objects and entries without a usable `docId` yield `None`.
    fn from_entry(entry: &Value) -> Option<Self> {
        let object = entry.as_object()?;

        let doc_id = match object.get("docId")? {
            Value::String(s) if !s.is_empty() => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };

        let filename = object
            .get("originalName")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_FILENAME)
            .to_string();

        Some(Self { doc_id, filename })
    }
}

/// Extracts every valid document reference from an upload response, in order.
pub fn pick_documents(response: &Value) -> Vec<DocumentRef> {
    response
        .get("files")
        .and_then(Value::as_array)
        .map(|files| files.iter().filter_map(DocumentRef::from_entry).collect())
        .unwrap_or_default()
}

/// A named PDF blob ready to be sent as one multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl PdfFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Validator::validate_pdf_path(path)?;

        let bytes = fs::read(path).map_err(|source| ClientError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| FALLBACK_FILENAME.to_string());

        Ok(Self::new(name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// The backend's response, verbatim.
    pub response: Value,
    /// Every valid document the response listed, in response order.
    pub documents: Vec<DocumentRef>,
    /// The subset of `documents` that was new to the session.
    pub added: Vec<DocumentRef>,
}
