// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;
use url::Url;

/// Bearer token for the Outline API.
///
/// Neither `Debug` nor `Display` reveal the value; the only way to read it is
/// [`ApiToken::expose`], which the invoker calls when building the
/// `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    const REDACTED: &'static str = "********";

    /// Create a new API token with validation
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();

        if token.trim().is_empty() {
            return Err(ValidationError::InvalidApiToken {
                reason: "API token cannot be empty".to_string(),
            });
        }

        // The token travels in an HTTP header; reject what a header can't carry.
        if token
            .chars()
            .any(|c| c.is_control() || c.is_whitespace() || !c.is_ascii())
        {
            return Err(ValidationError::InvalidApiToken {
                reason: "API token must be printable ASCII without whitespace".to_string(),
            });
        }

        Ok(Self(token))
    }

    /// Returns the raw secret. Never log the result.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiToken").field(&Self::REDACTED).finish()
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::REDACTED)
    }
}

/// Base URL of an Outline instance API, e.g. `https://app.getoutline.com/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint(Url);

impl ApiEndpoint {
    /// Parses and validates an endpoint URL.
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        let parsed = Url::parse(url.trim()).map_err(|e| ValidationError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: "Only HTTP and HTTPS URLs are supported".to_string(),
            });
        }

        if parsed.cannot_be_a_base() || parsed.host().is_none() {
            return Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: "URL must be absolute and include a host".to_string(),
            });
        }

        Ok(Self(parsed))
    }

    /// Joins a route suffix onto the endpoint with exactly one separating slash.
    pub fn route(&self, suffix: &str) -> Result<Url, ValidationError> {
        let joined = format!(
            "{}/{}",
            self.0.as_str().trim_end_matches('/'),
            suffix.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| ValidationError::InvalidUrl {
            url: joined.clone(),
            reason: e.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where to reach Outline and how to authenticate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub endpoint: ApiEndpoint,
    pub token: ApiToken,
}

impl ApiCredentials {
    pub fn new(endpoint: ApiEndpoint, token: ApiToken) -> Self {
        Self { endpoint, token }
    }
}
