//! Error body returned by the ingestion API
//!
//! The service reports failures as `{ "detail": ... }` where `detail` is
//! either a plain string or a list of field validation items. The variants
//! are modelled explicitly so message extraction is an ordered match
//! instead of opportunistic field probing.

use serde::{Deserialize, Serialize};

/// Top-level error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// The `detail` field of an error response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// Single generic message, e.g. `{"detail": "Invalid timestamp"}`
    Message(String),
    /// Field validation errors, e.g. `{"detail": [{"msg": "..."}]}`
    Validation(Vec<ValidationItem>),
}

/// One entry of a validation error list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationItem {
    pub msg: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ApiErrorBody {
    /// Extract the displayable message, in precedence order: first
    /// validation item, then the plain detail string. `None` when the body
    /// carries nothing usable.
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(ErrorDetail::Validation(items)) => items.first().map(|item| item.msg.as_str()),
            Some(ErrorDetail::Message(msg)) => Some(msg.as_str()),
            None => None,
        }
    }
}
