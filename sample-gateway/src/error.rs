//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sample_core::Role;
use sample_store::StoreError;
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// An error propagated from a read collaborator.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A required request parameter is absent or empty.
    #[error("InvalidParameter")]
    InvalidParameter,

    /// The caller does not hold the role a guarded route requires.
    #[error("forbidden: requires role '{0}'")]
    Forbidden(Role),

    /// A response value could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(_) | ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidParameter => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
