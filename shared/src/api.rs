//! The seam to the remote loan-records REST API.
//!
//! The frontend implements [`LoanApi`] with `gloo-net`, the CLI with
//! `reqwest`. Futures are `?Send` so the browser implementation can hold JS
//! values across awaits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::loan::{LoanFields, LoanId, LoanRecord};

/// Default API origin for local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
/// Default collection path under the API origin.
pub const DEFAULT_LOANS_PATH: &str = "loans";

/// Failures reported by a [`LoanApi`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),
    /// The API answered with a non-success status.
    #[error("{}", describe_status(.status, .message))]
    Status { status: u16, message: Option<String> },
    /// The response body did not have the expected shape.
    #[error("Parse error: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("Serialize error: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error, pulling `message` out of a JSON error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty());
        Self::Status {
            status,
            message,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

fn describe_status(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("HTTP error: {status}"),
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Body returned by `POST /loans`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub inserted_id: LoanId,
}

/// Body of `PATCH /loans/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LoanPatch {
    /// Full edit from the form.
    Fields(LoanFields),
    /// Homepage visibility toggle only.
    Visibility {
        #[serde(rename = "showOnHome")]
        show_on_home: bool,
    },
}

/// Remote loan-records API.
#[async_trait(?Send)]
pub trait LoanApi {
    /// `GET /loans`
    async fn list_loans(&self) -> Result<Vec<LoanRecord>, ApiError>;
    /// `GET /loans/{id}`
    async fn get_loan(&self, id: &LoanId) -> Result<LoanRecord, ApiError>;
    /// `POST /loans`, returning the server-assigned id.
    async fn create_loan(&self, fields: &LoanFields) -> Result<LoanId, ApiError>;
    /// `PATCH /loans/{id}`
    async fn patch_loan(&self, id: &LoanId, patch: &LoanPatch) -> Result<(), ApiError>;
    /// `DELETE /loans/{id}`
    async fn delete_loan(&self, id: &LoanId) -> Result<(), ApiError>;
}

/// URL builder for the loan collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanEndpoints {
    base: String,
    collection: String,
}

impl Default for LoanEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_LOANS_PATH)
    }
}

impl LoanEndpoints {
    pub fn new(base: &str, collection: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
            collection: collection.trim().trim_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base, self.collection)
    }

    pub fn item_url(&self, id: &LoanId) -> String {
        format!("{}/{}", self.collection_url(), urlencoding::encode(id.as_str()))
    }
}
