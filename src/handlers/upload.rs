use crate::{AppError, AppState, Result};
use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::models::UploadPayload;
use crate::upstream::UpstreamReply;

pub const RESUME_FIELD: &str = "resume";

/// Bodies cut off by the request body limit count as oversized files.
fn multipart_error(e: MultipartError, max_file_size_mb: u64, context: &str) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::FileTooLarge(max_file_size_mb);
    }
    AppError::BadRequest(format!("{}: {}", context, e))
}

/// Accepts a resume as multipart field `resume`, keeps a copy under the
/// uploads directory and forwards it base64-encoded to the upstream API.
pub async fn upload_resume(
    State(state): State<Arc<AppState>>,
    multipart: Option<Multipart>,
) -> Result<UpstreamReply> {
    tracing::info!("Received resume upload");

    let Some(mut multipart) = multipart else {
        return Err(AppError::MissingFields(vec![RESUME_FIELD]));
    };

    let max_size = state.config.max_file_size_bytes();
    let mut resume: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!("Failed to read multipart field: {}", e);
        multipart_error(e, state.config.max_file_size_mb, "Failed to read form field")
    })? {
        let name = field.name().unwrap_or("").to_string();
        tracing::debug!("Processing field: {}", name);

        if name != RESUME_FIELD {
            continue;
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, state.config.max_file_size_mb, "Failed to read resume"))?;

        if data.len() as u64 > max_size {
            return Err(AppError::FileTooLarge(state.config.max_file_size_mb));
        }

        if !filename.is_empty() && !data.is_empty() {
            resume = Some((filename, data));
        }
    }

    let Some((filename, data)) = resume else {
        return Err(AppError::MissingFields(vec![RESUME_FIELD]));
    };

    let stored = state.uploads.ingest(&filename, &data).await?;
    tracing::info!("Stored resume {} at {}", filename, stored.path.display());

    let payload = UploadPayload::resume(&stored.base64);
    Ok(state.upstream.upload(&payload).await?)
}
