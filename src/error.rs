// src/error.rs
//! Application error types with structured error handling.
//!
//! Every failure a run can end in is an [`AppError`]. [`ErrorKind`] sorts
//! them into the four terminal categories a caller can act on, plus a
//! catch-all for anything unexpected.

use std::fmt;
use thiserror::Error;

/// Classification of a failed run.
///
/// None of these are retried; the kind tells the caller where the failure
/// happened rather than whether to try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Parameters were missing or malformed; nothing was sent.
    Validation,
    /// The Outline instance could not be reached.
    Transport,
    /// Outline answered with a status other than success.
    RemoteStatus,
    /// Outline answered success but the body broke its contract.
    ResponseFormat,
    /// Anything else, e.g. a payload that failed to serialize.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Transport => write!(f, "transport"),
            Self::RemoteStatus => write!(f, "remote_status"),
            Self::ResponseFormat => write!(f, "response_format"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),

    #[error("Error creating document: {cause}")]
    Transport { cause: String },

    #[error("Failed to create document: HTTP {status}: {body}")]
    RemoteStatus { status: u16, body: String },

    #[error("invalid response from API")]
    MissingDocument,

    #[error("invalid response from API: {0}")]
    MalformedResponse(String),

    #[error("Failed to read module arguments from {path}: {source}")]
    ArgumentsFile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("JSON parse error for {path}: {source}")]
    JsonParseError {
        path: std::path::PathBuf,
        source: serde_json::Error,
    },

    #[error("Error creating document: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AppError {
    /// Sorts the error into its terminal category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingConfiguration(_)
            | Self::Validation(_)
            | Self::ArgumentsFile { .. }
            | Self::JsonParseError { .. } => ErrorKind::Validation,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::RemoteStatus { .. } => ErrorKind::RemoteStatus,
            Self::MissingDocument | Self::MalformedResponse(_) => ErrorKind::ResponseFormat,
            Self::InternalError { .. } => ErrorKind::Internal,
        }
    }

    /// The raw response body, when Outline sent one worth showing.
    pub fn http_response(&self) -> Option<&str> {
        match self {
            Self::RemoteStatus { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
