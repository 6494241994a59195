//! Category payloads from the storefront API.
//!
//! Endpoints answer either with an envelope `{ "success", "data", "message" }`
//! or with a bare JSON array. Both decode to the same list.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A product category as listed by the category endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API rejected request: {0}")]
    Rejected(String),
    #[error("malformed API response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListResponse<T> {
    Raw(Vec<T>),
    Envelope {
        success: bool,
        data: Option<Vec<T>>,
        message: Option<String>,
    },
}

/// Decode a list endpoint body in either response shape.
pub fn parse_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    match serde_json::from_str::<ListResponse<T>>(body)? {
        ListResponse::Raw(items) => Ok(items),
        ListResponse::Envelope {
            success: true,
            data,
            ..
        } => Ok(data.unwrap_or_default()),
        ListResponse::Envelope {
            success: false,
            message,
            ..
        } => Err(ApiError::Rejected(
            message.unwrap_or_else(|| "no message".to_string()),
        )),
    }
}

pub fn parse_categories(body: &str) -> Result<Vec<Category>, ApiError> {
    parse_list(body)
}

/// Read and decode a saved category listing.
pub fn load_categories(path: &Path) -> Result<Vec<Category>> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("reading categories from {}", path.display()))?;
    let categories = parse_categories(&body)
        .with_context(|| format!("decoding categories from {}", path.display()))?;
    tracing::debug!(count = categories.len(), "loaded categories");
    Ok(categories)
}
