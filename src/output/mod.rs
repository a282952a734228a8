// src/output/mod.rs
//! The result of a run and how it is handed back to the runner.
//!
//! Building the result is pure; [`emit`] is the only I/O.

mod types;
mod writer;

pub use types::{ExecutionResult, FailureReport, ModuleOutput};
pub use writer::emit;
