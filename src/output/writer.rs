// src/output/writer.rs
//! Emits the module result.

use super::types::ExecutionResult;
use crate::error::AppError;
use std::io::Write;

/// Writes `result` as a single JSON line, the format runners read back.
pub fn emit<W: Write>(result: &ExecutionResult, out: &mut W) -> Result<(), AppError> {
    serde_json::to_writer(&mut *out, &result.to_module_output())?;
    writeln!(out).map_err(|e| AppError::InternalError {
        message: format!("Failed to write module result: {}", e),
        source: Some(Box::new(e)),
    })?;
    out.flush().map_err(|e| AppError::InternalError {
        message: format!("Failed to write module result: {}", e),
        source: Some(Box::new(e)),
    })
}
