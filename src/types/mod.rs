use thiserror::Error;

mod document;
mod domain_types;

pub use document::*;
pub use domain_types::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("missing required arguments: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error(
        "Unsupported parameters: {}. Supported parameters include: {}",
        .names.join(", "),
        .supported.join(", ")
    )]
    UnsupportedParameters {
        names: Vec<String>,
        supported: Vec<String>,
    },

    #[error("argument '{name}' is of type {found} and we were unable to convert to {expected}")]
    InvalidType {
        name: String,
        found: &'static str,
        expected: &'static str,
    },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid API token: {reason}")]
    InvalidApiToken { reason: String },
}
