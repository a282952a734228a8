// src/api/client.rs
//! Blocking HTTP transport for the Outline API.
//!
//! A thin wrapper around `reqwest::blocking`. It sends what it is given and
//! reports the status and body; it does not retry, parse, or decide success.

use super::{HttpOutcome, HttpRequest, HttpTransport};
use crate::error::AppError;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::error::Error as _;
use std::time::Duration;

/// The production [`HttpTransport`].
#[derive(Clone)]
pub struct OutlineHttpClient {
    client: Client,
}

impl OutlineHttpClient {
    /// Creates a client. `None` leaves the request unbounded.
    ///
    /// Redirects are not followed: a 3xx is the outcome of the one request.
    pub fn new(timeout: Option<Duration>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::InternalError {
                message: format!("Failed to build HTTP client: {}", describe(&e)),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { client })
    }
}

impl HttpTransport for OutlineHttpClient {
    fn send(&self, request: HttpRequest) -> Result<HttpOutcome, AppError> {
        let response = self
            .client
            .post(request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .map_err(|e| AppError::Transport { cause: describe(&e) })?;

        let status_code = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| AppError::Transport { cause: describe(&e) })?;

        Ok(HttpOutcome { status_code, body })
    }
}

/// Flattens a reqwest error and its sources into one line.
///
/// The top-level message alone ("error sending request for url ...") hides
/// the useful part, e.g. "Connection refused" or a DNS failure.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    if err.is_timeout() && !message.contains("timed out") {
        message.push_str(" (timed out)");
    }
    message
}
