// src/api/invoker.rs
//! Sends a prepared `documents.create` call with Outline authentication.

use super::{HttpOutcome, HttpRequest, HttpTransport};
use crate::api::request::DocumentCreation;
use crate::error::AppError;
use crate::types::ApiToken;
use reqwest::header;

/// Performs the single authenticated POST of a run.
pub struct ApiInvoker<T> {
    transport: T,
}

impl<T: HttpTransport> ApiInvoker<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Serializes the payload, attaches headers, and sends exactly once.
    pub fn invoke(
        &self,
        creation: &DocumentCreation,
        token: &ApiToken,
    ) -> Result<HttpOutcome, AppError> {
        let body = serde_json::to_vec(&creation.payload)?;
        let headers = create_headers(token)?;

        log::debug!("POST {}", creation.url);

        let outcome = self.transport.send(HttpRequest {
            url: creation.url.clone(),
            headers,
            body,
        })?;

        log::debug!("{} answered HTTP {}", creation.url, outcome.status_code);
        Ok(outcome)
    }
}

/// Creates the headers for an Outline API request.
fn create_headers(token: &ApiToken) -> Result<header::HeaderMap, AppError> {
    let mut headers = header::HeaderMap::new();

    let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", token.expose()))
        .map_err(|e| AppError::InternalError {
            message: format!("Invalid API token format: {}", e),
            source: None,
        })?;
    auth.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth);

    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );

    Ok(headers)
}
