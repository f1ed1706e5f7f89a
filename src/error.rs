// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The backend answered with a status outside 2xx. `body` is the raw
    /// response text, kept for display.
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// Anything else that stopped a call from producing a usable response:
    /// connection errors, timeouts, undecodable bodies.
    #[error("Transport failure: {0}")]
    TransportFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl ClientError {
    pub fn is_request_failure(&self) -> bool {
        matches!(self, ClientError::RequestFailed { .. })
    }

    /// Raw backend body, present only for `RequestFailed`.
    pub fn body(&self) -> Option<&str> {
        match self {
            ClientError::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }
}
