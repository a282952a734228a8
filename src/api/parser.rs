// src/api/parser.rs
//! Reads the `documents.create` response.
//!
//! Success means HTTP 200 with a JSON object whose `data` field holds a
//! non-empty document. Anything else is a failure of a specific kind.

use super::HttpOutcome;
use crate::constants::{CREATED_STATUS, ERROR_BODY_PREVIEW_LENGTH, RESPONSE_DATA_FIELD};
use crate::error::AppError;
use crate::output::ExecutionResult;
use crate::types::Document;
use serde_json::Value;

/// Extracts the created document from an outcome.
pub fn parse_created_document(outcome: &HttpOutcome) -> Result<Document, AppError> {
    if outcome.status_code != CREATED_STATUS {
        log::debug!(
            "Outline rejected the request: HTTP {} {}",
            outcome.status_code,
            preview(&outcome.body)
        );
        return Err(AppError::RemoteStatus {
            status: outcome.status_code,
            body: outcome.body.clone(),
        });
    }

    let parsed: Value = serde_json::from_str(&outcome.body)
        .map_err(|e| AppError::MalformedResponse(format!("body is not JSON ({})", e)))?;

    let data = match parsed.get(RESPONSE_DATA_FIELD) {
        Some(data) if is_populated(data) => data,
        _ => {
            log::debug!("Response has no document: {}", preview(&outcome.body));
            return Err(AppError::MissingDocument);
        }
    };

    match data {
        Value::Object(fields) => Ok(Document::from_map(fields.clone())),
        other => Err(AppError::MalformedResponse(format!(
            "`{}` is {}, expected an object",
            RESPONSE_DATA_FIELD,
            json_type_name(other)
        ))),
    }
}

/// Maps an outcome to the result reported to the runner.
pub fn interpret(outcome: &HttpOutcome) -> ExecutionResult {
    match parse_created_document(outcome) {
        Ok(document) => ExecutionResult::created(document),
        Err(err) => ExecutionResult::failed(&err),
    }
}

/// Whether a JSON value carries anything: null, false, zero, and empty
/// strings, arrays, and objects do not.
fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() <= ERROR_BODY_PREVIEW_LENGTH {
        body.to_string()
    } else {
        let head: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}...", head)
    }
}
