// tests/common/mod.rs
//! Shared test helpers.

#![allow(dead_code)]

use outline_document::{
    ApiCredentials, ApiEndpoint, ApiToken, AppError, HttpOutcome, HttpRequest, HttpTransport,
};
use std::cell::RefCell;

pub const TEST_TOKEN: &str = "ol_api_test_token_0123456789";

pub fn test_credentials() -> ApiCredentials {
    test_credentials_for("https://outline.example.com/api")
}

pub fn test_credentials_for(endpoint: &str) -> ApiCredentials {
    ApiCredentials::new(
        ApiEndpoint::parse(endpoint).expect("Test endpoint should be valid"),
        ApiToken::new(TEST_TOKEN).expect("Test token should be valid"),
    )
}

/// A transport that records every request and answers from a script.
pub struct RecordingTransport {
    answer: Result<HttpOutcome, String>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn answering(status: u16, body: &str) -> Self {
        Self {
            answer: Ok(HttpOutcome::new(status, body)),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn unreachable(cause: &str) -> Self {
        Self {
            answer: Err(cause.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_body(&self) -> serde_json::Value {
        let requests = self.requests.borrow();
        let request = requests.last().expect("No request was sent");
        serde_json::from_slice(&request.body).expect("Request body should be JSON")
    }
}

impl HttpTransport for RecordingTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpOutcome, AppError> {
        self.requests.borrow_mut().push(request);
        match &self.answer {
            Ok(outcome) => Ok(outcome.clone()),
            Err(cause) => Err(AppError::Transport {
                cause: cause.clone(),
            }),
        }
    }
}
