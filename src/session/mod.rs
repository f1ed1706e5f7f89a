// file: src/session/mod.rs
// description: session module exports
// reference: internal module structure

pub mod client;
pub mod resolve;
pub mod state;

pub use client::SessionClient;
pub use resolve::{normalize_whitespace, resolve_doc_id};
pub use state::{PICKER_NONE, SessionState};
