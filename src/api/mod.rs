// src/api/mod.rs
//! Outline API interaction: building, sending, and reading the
//! `documents.create` call.
//!
//! Request construction and response interpretation are pure; the only I/O
//! sits behind [`HttpTransport`], so callers can inject their own.

pub mod client;
pub mod invoker;
pub mod parser;
pub mod request;

use crate::error::AppError;
use reqwest::header::HeaderMap;
use url::Url;

/// A fully prepared HTTP POST.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// What the remote answered: status and raw body, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOutcome {
    pub status_code: u16,
    pub body: String,
}

impl HttpOutcome {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }
}

/// The ability to deliver one HTTP request.
///
/// Implementations send exactly once. A failure to reach the server is
/// [`AppError::Transport`]; any HTTP status, success or not, is an outcome.
pub trait HttpTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpOutcome, AppError>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn send(&self, request: HttpRequest) -> Result<HttpOutcome, AppError> {
        (**self).send(request)
    }
}

pub use client::OutlineHttpClient;
pub use invoker::ApiInvoker;
pub use parser::{interpret, parse_created_document};
pub use request::{build, CreateDocumentPayload, CreateDocumentRequest, DocumentCreation};
