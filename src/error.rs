use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::upstream::UpstreamError;

pub type Result<T> = std::result::Result<T, AppError>;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all the required fields.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Failed to store file: {0}")]
    FilePersist(String),

    #[error("Failed to encode file: {0}")]
    FileEncode(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("File too large: max {0}MB allowed")]
    FileTooLarge(u64),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingFields(fields) => {
                tracing::warn!("Missing required fields: {}", fields.join(", "));
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": MISSING_FIELDS_MESSAGE })),
                )
                    .into_response()
            }
            AppError::Upstream(e) => {
                // Upstream detail stays in the logs.
                tracing::error!("Upstream error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
            }
            AppError::FilePersist(msg) => {
                tracing::error!("Failed to store file: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
            AppError::FileEncode(msg) => {
                tracing::error!("Failed to encode file: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(json!({ "message": msg }))).into_response()
            }
            AppError::FileTooLarge(max) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(json!({
                    "message": format!("File too large: max {}MB allowed", max)
                })),
            )
                .into_response(),
        }
    }
}
