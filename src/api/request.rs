// src/api/request.rs
//! Turns caller parameters into the `documents.create` request.
//!
//! Everything here is pure: validation and payload construction happen
//! before any network activity and produce the same bytes for the same input.

use crate::constants::DOCUMENTS_CREATE_ROUTE;
use crate::error::AppError;
use crate::types::{ApiEndpoint, ValidationError};
use serde::Serialize;
use url::Url;

/// What the caller asked Outline to create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub text: String,
    pub collection_id: String,
    pub parent_document_id: Option<String>,
    pub template_id: Option<String>,
    pub is_template: bool,
    pub publish: bool,
}

impl CreateDocumentRequest {
    pub fn new(title: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            collection_id: collection_id.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_parent_document(mut self, id: impl Into<String>) -> Self {
        self.parent_document_id = Some(id.into());
        self
    }

    pub fn with_template(mut self, id: impl Into<String>) -> Self {
        self.template_id = Some(id.into());
        self
    }

    pub fn as_template(mut self, is_template: bool) -> Self {
        self.is_template = is_template;
        self
    }

    pub fn published(mut self, publish: bool) -> Self {
        self.publish = publish;
        self
    }

    /// Rejects requests Outline would refuse before anything is sent.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyField("title"));
        }
        if self.collection_id.is_empty() {
            return Err(ValidationError::EmptyField("collection_id"));
        }
        Ok(())
    }
}

/// JSON body of `POST documents.create`.
///
/// `template` and `publish` are always sent, the two identifiers only when
/// populated. Field order is fixed so serialization is byte-stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentPayload {
    pub title: String,
    pub text: String,
    pub collection_id: String,
    pub template: bool,
    pub publish: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

/// A validated request, ready for the invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCreation {
    pub url: Url,
    pub payload: CreateDocumentPayload,
}

/// Validates `request` and builds the target URL and payload.
pub fn build(
    endpoint: &ApiEndpoint,
    request: &CreateDocumentRequest,
) -> Result<DocumentCreation, AppError> {
    request.validate()?;

    let payload = CreateDocumentPayload {
        title: request.title.clone(),
        text: request.text.clone(),
        collection_id: request.collection_id.clone(),
        template: request.is_template,
        publish: request.publish,
        parent_document_id: populated(&request.parent_document_id),
        template_id: populated(&request.template_id),
    };
    let url = endpoint.route(DOCUMENTS_CREATE_ROUTE)?;

    Ok(DocumentCreation { url, payload })
}

/// An identifier counts only when it has content; `Some("")` is dropped.
fn populated(id: &Option<String>) -> Option<String> {
    id.as_deref().filter(|s| !s.is_empty()).map(str::to_owned)
}
