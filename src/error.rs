use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::StoreError;
use crate::scheduling::ValidationError;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Validation(ValidationError),
    QueryFailure(StoreError),
    WriteFailure(StoreError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Validation(err) => write!(f, "Validation Error: {err}"),
            AppError::QueryFailure(err) => write!(f, "Query Failure: {err}"),
            AppError::WriteFailure(err) => write!(f, "Write Failure: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => {
                tracing::warn!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::Validation(err) => {
                tracing::warn!("Rejected request: {err}");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            AppError::QueryFailure(err) => {
                tracing::error!(code = ?err.code(), "Document store query failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to read from the document store".to_string(),
                )
            }
            AppError::WriteFailure(err) => {
                tracing::error!(code = ?err.code(), "Document store write failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to write to the document store".to_string(),
                )
            }
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}
