// src/lib.rs
//! outline-document library: creates a document in an Outline knowledge base.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `ErrorKind`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `ModuleConfig`, `ArgumentSpec`
//! - **Domain types** — `ApiCredentials`, `ApiEndpoint`, `ApiToken`, `Document`
//! - **API** — `build`, `ApiInvoker`, `interpret`, `HttpTransport`
//! - **Pipeline** — `DocumentCreatePipeline`
//! - **Output** — `ExecutionResult`, `emit`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, ErrorKind};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::arguments::{
    document_create_spec, outline_api_fragment, ArgumentSpec, ModuleParams, OptionSpec,
    OptionType,
};
pub use crate::config::{CommandLineInput, ModuleConfig};

// --- Domain Types ---
pub use crate::types::{ApiCredentials, ApiEndpoint, ApiToken, Document};

// --- API ---
pub use crate::api::{
    build, interpret, parse_created_document, ApiInvoker, CreateDocumentPayload,
    CreateDocumentRequest, DocumentCreation, HttpOutcome, HttpRequest, HttpTransport,
    OutlineHttpClient,
};

// --- Pipeline ---
pub use crate::pipeline::{DocumentCreatePipeline, Stage};

// --- Output ---
pub use crate::output::{emit, ExecutionResult, FailureReport, ModuleOutput};
