// src/output/types.rs
//! What a run reports back to the automation runner.

use crate::error::{AppError, ErrorKind};
use crate::types::Document;
use serde::Serialize;

/// Why a run failed, in a form fit to show the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub kind: ErrorKind,
    pub msg: String,
    /// Raw body of a rejected request, kept for diagnosis.
    pub http_response: Option<String>,
}

/// Final state of one run.
///
/// `changed` is only ever true together with a populated document and no
/// error; the constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionResult {
    pub changed: bool,
    pub document: Document,
    pub error: Option<FailureReport>,
}

impl ExecutionResult {
    /// Outline created `document`.
    pub fn created(document: Document) -> Self {
        Self {
            changed: !document.is_empty(),
            document,
            error: None,
        }
    }

    /// Nothing was sent, as in check mode.
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            document: Document::empty(),
            error: None,
        }
    }

    /// The run ended in `err`. The message is the error's display text.
    pub fn failed(err: &AppError) -> Self {
        Self {
            changed: false,
            document: Document::empty(),
            error: Some(FailureReport {
                kind: err.kind(),
                msg: err.to_string(),
                http_response: err.http_response().map(str::to_owned),
            }),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// The JSON object printed for the runner.
    pub fn to_module_output(&self) -> ModuleOutput<'_> {
        ModuleOutput {
            changed: self.changed,
            document: &self.document,
            failed: self.is_failure(),
            msg: self.error.as_ref().map(|e| e.msg.as_str()),
            http_response: self
                .error
                .as_ref()
                .and_then(|e| e.http_response.as_deref()),
        }
    }
}

/// Wire shape of the module result.
#[derive(Debug, Serialize)]
pub struct ModuleOutput<'a> {
    pub changed: bool,
    pub document: &'a Document,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_response: Option<&'a str>,
}
