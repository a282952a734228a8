// src/constants.rs
//! Domain constants that define the operational boundaries of the module.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Outline API boundaries
// ---------------------------------------------------------------------------

/// Route suffix joined onto the configured API endpoint to create a document.
pub const DOCUMENTS_CREATE_ROUTE: &str = "documents.create";

/// The only HTTP status the Outline API uses to report a created document.
pub const CREATED_STATUS: u16 = 200;

/// The response field that carries the created document on success.
pub const RESPONSE_DATA_FIELD: &str = "data";

// ---------------------------------------------------------------------------
// Connection settings
// ---------------------------------------------------------------------------

/// Environment variable consulted when `api_endpoint` is not given.
pub const ENV_API_URL: &str = "OUTLINE_API_URL";

/// Environment variable consulted when `api_token` is not given.
pub const ENV_API_TOKEN: &str = "OUTLINE_API_TOKEN";

/// Seconds to wait for the Outline API before giving up on the request.
///
/// Matches the default of the HTTP helper automation runners ship with.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// ---------------------------------------------------------------------------
// Runner protocol
// ---------------------------------------------------------------------------

/// Key wrapping the module arguments in a runner-written arguments file.
pub const MODULE_ARGS_KEY: &str = "ANSIBLE_MODULE_ARGS";

/// Prefix of runner-internal arguments that are not module options.
pub const RUNNER_INTERNAL_PREFIX: &str = "_ansible_";

/// Runner-internal argument that requests check (dry-run) mode.
pub const CHECK_MODE_ARG: &str = "_ansible_check_mode";

/// Replacement shown instead of any `no_log` argument value.
pub const NO_LOG_PLACEHOLDER: &str = "VALUE_SPECIFIED_IN_NO_LOG_PARAMETER";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing response bodies in logs.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
