// src/pipeline.rs
//! The `documents.create` run: validate, invoke, interpret.
//!
//! A run moves forward through [`Stage`]s and ends in exactly one
//! [`ExecutionResult`]. Every error, whatever its stage, is turned into a
//! failed result here; nothing escapes to the caller.

use crate::api::{self, ApiInvoker, CreateDocumentRequest, DocumentCreation, HttpTransport};
use crate::error::AppError;
use crate::output::ExecutionResult;
use crate::types::ApiCredentials;
use std::fmt;

/// Where a run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Invoking,
    Interpreting,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validating => write!(f, "validating"),
            Self::Invoking => write!(f, "invoking"),
            Self::Interpreting => write!(f, "interpreting"),
        }
    }
}

/// One document creation against one Outline instance.
pub struct DocumentCreatePipeline<'a, T> {
    credentials: &'a ApiCredentials,
    invoker: ApiInvoker<T>,
    check_mode: bool,
}

impl<'a, T: HttpTransport> DocumentCreatePipeline<'a, T> {
    pub fn new(credentials: &'a ApiCredentials, transport: T) -> Self {
        Self {
            credentials,
            invoker: ApiInvoker::new(transport),
            check_mode: false,
        }
    }

    /// In check mode the request is validated but never sent.
    pub fn check_mode(mut self, enabled: bool) -> Self {
        self.check_mode = enabled;
        self
    }

    /// Runs the request to completion.
    pub fn execute(&self, request: &CreateDocumentRequest) -> ExecutionResult {
        match self.run(request) {
            Ok(result) => result,
            Err((stage, err)) => {
                log::warn!("Document creation failed while {}: {}", stage, err);
                ExecutionResult::failed(&err)
            }
        }
    }

    fn run(&self, request: &CreateDocumentRequest) -> Result<ExecutionResult, (Stage, AppError)> {
        let creation = self.validate(request).map_err(|e| (Stage::Validating, e))?;

        if self.check_mode {
            log::info!("Check mode: not sending {}", creation.url);
            return Ok(ExecutionResult::unchanged());
        }

        let outcome = self
            .invoker
            .invoke(&creation, &self.credentials.token)
            .map_err(|e| (Stage::Invoking, e))?;

        log::debug!("Stage: {}", Stage::Interpreting);
        let result = api::interpret(&outcome);
        if !result.is_failure() {
            log::info!(
                "Created document '{}' ({})",
                result.document.title().unwrap_or(&request.title),
                result.document.id().unwrap_or("no id")
            );
        }
        Ok(result)
    }

    fn validate(&self, request: &CreateDocumentRequest) -> Result<DocumentCreation, AppError> {
        log::debug!("Stage: {}", Stage::Validating);
        api::build(&self.credentials.endpoint, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HttpOutcome, HttpRequest};
    use crate::error::ErrorKind;
    use crate::types::{ApiEndpoint, ApiToken};
    use std::cell::Cell;

    struct CountingTransport {
        calls: Cell<usize>,
        outcome: HttpOutcome,
    }

    impl CountingTransport {
        fn answering(status: u16, body: &str) -> Self {
            Self {
                calls: Cell::new(0),
                outcome: HttpOutcome::new(status, body),
            }
        }
    }

    impl HttpTransport for CountingTransport {
        fn send(&self, _: HttpRequest) -> Result<HttpOutcome, AppError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.outcome.clone())
        }
    }

    fn credentials() -> ApiCredentials {
        ApiCredentials::new(
            ApiEndpoint::parse("https://outline.example.com/api").unwrap(),
            ApiToken::new("ol_api_secret123").unwrap(),
        )
    }

    #[test]
    fn test_successful_run_sends_once() {
        let credentials = credentials();
        let transport = CountingTransport::answering(200, r#"{"data":{"id":"X","title":"T"}}"#);
        let pipeline = DocumentCreatePipeline::new(&credentials, &transport);

        let result = pipeline.execute(&CreateDocumentRequest::new("T", "col-1"));

        assert!(result.changed);
        assert_eq!(result.document.id(), Some("X"));
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn test_check_mode_sends_nothing() {
        let credentials = credentials();
        let transport = CountingTransport::answering(200, r#"{"data":{"id":"X"}}"#);
        let pipeline = DocumentCreatePipeline::new(&credentials, &transport).check_mode(true);

        let result = pipeline.execute(&CreateDocumentRequest::new("T", "col-1"));

        assert_eq!(result, ExecutionResult::unchanged());
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_invalid_request_fails_before_sending() {
        let credentials = credentials();
        let transport = CountingTransport::answering(200, r#"{"data":{"id":"X"}}"#);
        let pipeline = DocumentCreatePipeline::new(&credentials, &transport);

        let result = pipeline.execute(&CreateDocumentRequest::new("T", ""));

        assert!(!result.changed);
        assert_eq!(result.error.unwrap().kind, ErrorKind::Validation);
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_check_mode_still_validates() {
        let credentials = credentials();
        let transport = CountingTransport::answering(200, "{}");
        let pipeline = DocumentCreatePipeline::new(&credentials, &transport).check_mode(true);

        let result = pipeline.execute(&CreateDocumentRequest::new("", "col-1"));

        assert!(result.is_failure());
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn test_failure_messages_never_contain_the_token() {
        let credentials = credentials();
        let transport = CountingTransport::answering(401, r#"{"error":"authentication_required"}"#);
        let pipeline = DocumentCreatePipeline::new(&credentials, &transport);

        let result = pipeline.execute(&CreateDocumentRequest::new("T", "col-1"));
        let failure = result.error.unwrap();

        assert_eq!(failure.kind, ErrorKind::RemoteStatus);
        assert!(!failure.msg.contains("secret123"));
    }
}
