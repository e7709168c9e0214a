//! API error taxonomy and HTTP mapping
//!
//! Every handler maps its faults to one of these variants before
//! responding. Internal detail (driver errors, hash parse errors)
//! is logged server-side and never serialized into a response body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad or missing input fields
    #[error("{0}")]
    Validation(String),

    /// Unknown username or wrong password. One variant for both, so the
    /// response never reveals which part was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token supplied on a protected route
    #[error("Token is required")]
    MissingCredential,

    /// Token supplied but failed verification (bad signature or expired,
    /// never distinguished to the client)
    #[error("Invalid or expired token")]
    InvalidCredential,

    /// Duplicate username at signup
    #[error("Username already exists")]
    Conflict,

    /// Resource absent or owned by someone else. Same response either way.
    #[error("Note not found")]
    NotFound,

    /// Backing-store fault. Detail stays in the logs.
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::MissingCredential => StatusCode::FORBIDDEN,
            ApiError::InvalidCredential => StatusCode::UNAUTHORIZED,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-visible message. Server faults collapse to a generic line.
    fn client_message(&self) -> String {
        match self {
            ApiError::Storage(_) | ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Storage(_) | ApiError::Internal(_) = &self {
            tracing::error!(error = ?self, "request failed");
        }

        let status = self.status_code();
        let body = Json(json!({ "error": self.client_message() }));
        (status, body).into_response()
    }
}
