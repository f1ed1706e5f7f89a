// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

pub use client::BackendClient;
pub use config::{BackendConfig, Config, UiConfig};
pub use error::{ClientError, Result};
pub use models::{AnswerResult, DocumentRef, PdfFile, Source, UploadOutcome, pick_documents};
pub use session::{SessionClient, SessionState, normalize_whitespace, resolve_doc_id};
pub use ui::{Operation, Repl, ReplCommand, Step};
pub use utils::Validator;
