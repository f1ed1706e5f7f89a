// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod answer;
pub mod document;

pub use answer::{AnswerResult, Source};
pub use document::{DocumentRef, PdfFile, UploadOutcome, pick_documents};
