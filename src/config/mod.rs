// src/config/mod.rs
pub mod arguments;

use crate::api::CreateDocumentRequest;
use crate::constants::{CHECK_MODE_ARG, DEFAULT_REQUEST_TIMEOUT_SECS, MODULE_ARGS_KEY};
use crate::error::AppError;
use crate::types::{ApiCredentials, ApiEndpoint, ApiToken};
use arguments::{document_create_spec, ModuleParams};
use clap::Parser;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Create a document in Outline", long_about = None)]
pub struct CommandLineInput {
    /// JSON file with module arguments, as written by an automation runner
    #[arg(long, value_name = "PATH")]
    pub args_file: Option<PathBuf>,

    /// URL of the Outline instance API (falls back to OUTLINE_API_URL)
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// API token (falls back to OUTLINE_API_TOKEN)
    #[arg(long)]
    pub api_token: Option<String>,

    /// The title of the document
    #[arg(long)]
    pub title: Option<String>,

    /// The body of the document, may contain markdown formatting
    #[arg(long)]
    pub text: Option<String>,

    /// Identifier of the collection to create the document in
    #[arg(long)]
    pub collection_id: Option<String>,

    /// Identifier of the document this should be a child of
    #[arg(long)]
    pub parent_document_id: Option<String>,

    /// Identifier of the template to create this document from
    #[arg(long)]
    pub template_id: Option<String>,

    /// Mark the new document as a template (`--template false` to unset)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub template: Option<bool>,

    /// Publish the document immediately so the team can see it
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub publish: Option<bool>,

    /// Validate and report without contacting Outline
    #[arg(long, default_value_t = false)]
    pub check: bool,

    /// Request timeout in seconds (0 = no timeout)
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CommandLineInput {
    /// Raw arguments from the command line alone. Flags that were not given
    /// are left out so file values and defaults can apply.
    fn flag_arguments(&self) -> Map<String, Value> {
        let mut raw = Map::new();
        let strings = [
            ("api_endpoint", &self.api_endpoint),
            ("api_token", &self.api_token),
            ("title", &self.title),
            ("text", &self.text),
            ("collection_id", &self.collection_id),
            ("parent_document_id", &self.parent_document_id),
            ("template_id", &self.template_id),
        ];
        for (name, value) in strings {
            if let Some(value) = value {
                raw.insert(name.to_string(), Value::String(value.clone()));
            }
        }
        let flags = [("template", self.template), ("publish", self.publish)];
        for (name, value) in flags {
            if let Some(value) = value {
                raw.insert(name.to_string(), Value::Bool(value));
            }
        }
        raw
    }
}

/// Resolved module configuration, validated and ready to run.
#[derive(Debug, Clone)]
pub struct ModuleConfig {
    pub credentials: ApiCredentials,
    pub request: CreateDocumentRequest,
    pub check_mode: bool,
    pub timeout: Option<Duration>,
}

impl ModuleConfig {
    /// Resolves configuration from CLI input, an optional arguments file,
    /// and the environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let mut raw = match &cli.args_file {
            Some(path) => read_arguments_file(path)?,
            None => Map::new(),
        };
        raw.extend(cli.flag_arguments());

        let check_mode = cli.check || raw.get(CHECK_MODE_ARG).and_then(Value::as_bool) == Some(true);

        let spec = document_create_spec();
        let params = spec.resolve(&raw)?;
        log::debug!(
            "Module arguments: {}",
            Value::Object(spec.redact(&params))
        );

        let mut config = Self::from_params(&params)?;
        config.check_mode = check_mode;
        config.timeout = (cli.timeout > 0).then(|| Duration::from_secs(cli.timeout));
        Ok(config)
    }

    /// Builds the configuration from resolved arguments.
    pub fn from_params(params: &ModuleParams) -> Result<Self, AppError> {
        let endpoint = params
            .str("api_endpoint")
            .ok_or_else(|| AppError::MissingConfiguration("api_endpoint is not set".to_string()))?;
        let token = params
            .str("api_token")
            .ok_or_else(|| AppError::MissingConfiguration("api_token is not set".to_string()))?;

        let credentials = ApiCredentials::new(ApiEndpoint::parse(endpoint)?, ApiToken::new(token)?);

        let request = CreateDocumentRequest {
            title: params.string("title"),
            text: params.string("text"),
            collection_id: params.string("collection_id"),
            parent_document_id: params.str("parent_document_id").map(str::to_owned),
            template_id: params.str("template_id").map(str::to_owned),
            is_template: params.flag("template"),
            publish: params.flag("publish"),
        };

        Ok(Self {
            credentials,
            request,
            check_mode: false,
            timeout: Some(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)),
        })
    }
}

/// Reads module arguments from `path`.
///
/// Accepts either a bare object of arguments or one wrapped under
/// `ANSIBLE_MODULE_ARGS`.
fn read_arguments_file(path: &Path) -> Result<Map<String, Value>, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ArgumentsFile {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: Value =
        serde_json::from_str(&content).map_err(|source| AppError::JsonParseError {
            path: path.to_path_buf(),
            source,
        })?;

    match parsed {
        Value::Object(mut map) => match map.remove(MODULE_ARGS_KEY) {
            Some(Value::Object(inner)) => Ok(inner),
            Some(_) => Err(AppError::MissingConfiguration(format!(
                "{} in {} must be an object",
                MODULE_ARGS_KEY,
                path.display()
            ))),
            None => Ok(map),
        },
        _ => Err(AppError::MissingConfiguration(format!(
            "{} must contain a JSON object of module arguments",
            path.display()
        ))),
    }
}
