// src/config/arguments.rs
//! Declarative module options.
//!
//! An [`ArgumentSpec`] maps each option name to its constraints. Options
//! shared by every Outline module live in [`outline_api_fragment`] and are
//! merged into an operation's own table when it is built, so each module
//! owns a complete, immutable description of what it accepts.

use crate::constants::{ENV_API_TOKEN, ENV_API_URL, NO_LOG_PLACEHOLDER, RUNNER_INTERNAL_PREFIX};
use crate::types::ValidationError;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Value type an option accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Str,
    Bool,
}

impl OptionType {
    fn name(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Bool => "bool",
        }
    }

    /// Converts `value` into this type, accepting the spellings runners use.
    fn coerce(self, value: &Value) -> Option<Value> {
        match (self, value) {
            (Self::Str, Value::String(_)) => Some(value.clone()),
            (Self::Str, Value::Number(n)) => Some(Value::String(n.to_string())),
            (Self::Str, Value::Bool(b)) => Some(Value::String(b.to_string())),
            (Self::Bool, Value::Bool(_)) => Some(value.clone()),
            (Self::Bool, Value::String(s)) => parse_bool(s).map(Value::Bool),
            (Self::Bool, Value::Number(n)) => match n.as_i64() {
                Some(1) => Some(Value::Bool(true)),
                Some(0) => Some(Value::Bool(false)),
                _ => None,
            },
            _ => None,
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" | "y" | "t" => Some(true),
        "false" | "no" | "off" | "0" | "n" | "f" => Some(false),
        _ => None,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Constraints and effects of a single option.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    pub kind: OptionType,
    pub required: bool,
    pub default: Option<Value>,
    /// Mask the value whenever arguments are logged.
    pub no_log: bool,
    /// Environment variable read when the option is not given.
    pub env_fallback: Option<&'static str>,
}

impl OptionSpec {
    pub fn of(kind: OptionType) -> Self {
        Self {
            kind,
            required: false,
            default: None,
            no_log: false,
            env_fallback: None,
        }
    }

    pub fn str() -> Self {
        Self::of(OptionType::Str)
    }

    pub fn bool() -> Self {
        Self::of(OptionType::Bool)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn no_log(mut self) -> Self {
        self.no_log = true;
        self
    }

    pub fn env(mut self, variable: &'static str) -> Self {
        self.env_fallback = Some(variable);
        self
    }
}

/// An ordered table of options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentSpec {
    options: IndexMap<&'static str, OptionSpec>,
}

impl ArgumentSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, spec: OptionSpec) -> Self {
        self.options.insert(name, spec);
        self
    }

    /// Adds every option of `fragment`. Its definitions win on conflict.
    pub fn merge(mut self, fragment: ArgumentSpec) -> Self {
        self.options.extend(fragment.options);
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.keys().copied()
    }

    /// Resolves raw arguments against the table using the process environment.
    pub fn resolve(&self, raw: &Map<String, Value>) -> Result<ModuleParams, ValidationError> {
        self.resolve_with_env(raw, |name| std::env::var(name).ok())
    }

    /// Resolves raw arguments: explicit value, then environment, then default.
    ///
    /// Runner-internal keys are ignored. Unknown keys, missing required
    /// options, and values of the wrong type are errors.
    pub fn resolve_with_env<F>(
        &self,
        raw: &Map<String, Value>,
        env: F,
    ) -> Result<ModuleParams, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let unsupported: Vec<String> = raw
            .keys()
            .filter(|key| !key.starts_with(RUNNER_INTERNAL_PREFIX))
            .filter(|key| !self.options.contains_key(key.as_str()))
            .cloned()
            .collect();
        if !unsupported.is_empty() {
            return Err(ValidationError::UnsupportedParameters {
                names: unsupported,
                supported: self.names().map(str::to_owned).collect(),
            });
        }

        let mut values = IndexMap::new();
        let mut missing = Vec::new();

        for (&name, spec) in &self.options {
            let given = raw
                .get(name)
                .filter(|v| !v.is_null())
                .cloned()
                .or_else(|| spec.env_fallback.and_then(&env).map(Value::String))
                .or_else(|| spec.default.clone());

            let Some(value) = given else {
                if spec.required {
                    missing.push(name.to_string());
                }
                continue;
            };

            let coerced = spec
                .kind
                .coerce(&value)
                .ok_or_else(|| ValidationError::InvalidType {
                    name: name.to_string(),
                    found: json_type_name(&value),
                    expected: spec.kind.name(),
                })?;
            values.insert(name, coerced);
        }

        if !missing.is_empty() {
            return Err(ValidationError::MissingRequired(missing));
        }

        Ok(ModuleParams { values })
    }

    /// Copy of `params` safe to log: `no_log` values are masked.
    pub fn redact(&self, params: &ModuleParams) -> Map<String, Value> {
        params
            .values
            .iter()
            .map(|(&name, value)| {
                let shown = match self.get(name) {
                    Some(spec) if spec.no_log => Value::String(NO_LOG_PLACEHOLDER.to_string()),
                    _ => value.clone(),
                };
                (name.to_string(), shown)
            })
            .collect()
    }
}

/// Options shared by every Outline module: where the API is and how to
/// authenticate.
pub fn outline_api_fragment() -> ArgumentSpec {
    ArgumentSpec::new()
        .with("api_endpoint", OptionSpec::str().required().env(ENV_API_URL))
        .with(
            "api_token",
            OptionSpec::str().required().no_log().env(ENV_API_TOKEN),
        )
}

/// Full option table of the `document_create` module.
pub fn document_create_spec() -> ArgumentSpec {
    ArgumentSpec::new()
        .with("title", OptionSpec::str().required())
        .with("text", OptionSpec::str().default(""))
        .with("collection_id", OptionSpec::str().required())
        .with("parent_document_id", OptionSpec::str())
        .with("template_id", OptionSpec::str())
        .with("template", OptionSpec::bool().default(false))
        .with("publish", OptionSpec::bool().default(false))
        .merge(outline_api_fragment())
}

/// Arguments after resolution. Every value has its declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleParams {
    values: IndexMap<&'static str, Value>,
}

impl ModuleParams {
    pub fn str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    /// Like [`ModuleParams::str`] but owned; unset reads as empty.
    pub fn string(&self, name: &str) -> String {
        self.str(name).unwrap_or_default().to_string()
    }

    pub fn flag(&self, name: &str) -> bool {
        self.values
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}
