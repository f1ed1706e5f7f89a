// file: src/ui/render.rs
// description: text rendering for documents, picker, answers and failures
// reference: mirrors the upload / ask panels of the web form

use crate::error::ClientError;
use crate::models::{AnswerResult, DocumentRef, Source, UploadOutcome};
use crate::session::SessionState;
use crate::utils::logging::{format_error, format_heading, format_info, format_success, format_warning};
use serde_json::Value;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Upload,
    Ask,
}

impl Operation {
    pub fn busy_message(&self) -> &'static str {
        match self {
            Operation::Upload => "Uploading",
            Operation::Ask => "Asking",
        }
    }

    pub fn failure_label(&self) -> &'static str {
        match self {
            Operation::Upload => "Upload failed",
            Operation::Ask => "Ask failed",
        }
    }
}

pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_documents(documents: &[DocumentRef]) -> String {
    let mut out = format_heading("Docs");
    out.push('\n');

    if documents.is_empty() {
        out.push_str(&format_info("No docs"));
        return out;
    }

    let lines: Vec<String> = documents
        .iter()
        .enumerate()
        .map(|(index, doc)| format!("{}. {}", index + 1, doc.filename))
        .collect();
    out.push_str(&lines.join("\n"));
    out
}

/// Picker entries numbered for `/pick`; the current choice is starred.
pub fn render_picker(state: &SessionState) -> String {
    let picked_index = state
        .picked_doc_id()
        .and_then(|id| state.documents().iter().position(|d| d.doc_id == id))
        .map(|i| i + 1)
        .unwrap_or(0);

    state
        .picker_labels()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let marker = if index == picked_index { "*" } else { " " };
            format!("{} {}. {}", marker, index, label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_status(state: &SessionState) -> String {
    let selected = state.selected_doc_id();
    format!(
        "Backend URL: {}\nDocuments: {}\nDocId: {}\nPicked: {}\nEffective docId: {}",
        state.backend_url(),
        state.documents().len(),
        if selected.is_empty() { "-" } else { selected },
        state.picked_doc_id().unwrap_or("none"),
        state
            .effective_doc_id()
            .unwrap_or_else(|| "none (all documents)".to_string())
    )
}

pub fn render_upload(outcome: &UploadOutcome, show_raw_json: bool) -> String {
    let mut out = format_success("Done");

    if show_raw_json {
        let _ = write!(out, "\n{}", pretty_json(&outcome.response));
    }

    let summary = format!(
        "{} document(s) listed, {} new",
        outcome.documents.len(),
        outcome.added.len()
    );
    let _ = write!(out, "\n{}", format_info(&summary));
    out
}

pub fn render_source(source: &Source) -> String {
    let raw = serde_json::to_value(source)
        .map(|value| pretty_json(&value))
        .unwrap_or_default();
    format!("▸ {}\n{}", source.summary(), indent(&raw, "    "))
}

pub fn render_answer(result: &AnswerResult, show_raw_json: bool) -> String {
    let mut out = format_success("Done");

    let _ = write!(out, "\n\n{}\n{}", format_heading("Answer"), result.answer);

    let _ = write!(out, "\n\n{}\n", format_heading("Sources"));
    if result.sources.is_empty() {
        out.push_str(&format_info("No sources"));
    } else {
        let sources: Vec<String> = result.sources.iter().map(render_source).collect();
        out.push_str(&sources.join("\n"));
    }

    if show_raw_json {
        let _ = write!(out, "\n\n{}\n{}", format_heading("JSON"), pretty_json(&result.raw));
    }

    out
}

/// Backend rejections show the raw body; transport problems show only the
/// generic label. Input problems are reported as warnings.
pub fn render_failure(operation: Operation, err: &ClientError) -> String {
    match err {
        ClientError::RequestFailed { body, .. } => {
            format!("{}\n{}", format_error("Request failed"), body)
        }
        ClientError::TransportFailed(_) => format_error(operation.failure_label()),
        ClientError::Validation(message) => format_warning(message),
        other => format_error(&other.to_string()),
    }
}
