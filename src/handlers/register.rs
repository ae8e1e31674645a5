use crate::{AppState, Result};
use axum::{extract::State, Json};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::models::{self, RegisterRequest};
use crate::upstream::UpstreamReply;

/// Forwards a candidate registration to the upstream API.
///
/// A missing, unreadable or non-object JSON body is treated as an empty
/// object, so it fails field validation like any other incomplete form.
pub async fn register(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Map<String, Value>>>,
) -> Result<UpstreamReply> {
    tracing::info!("Received registration");

    let request: RegisterRequest = models::from_object(body.map(|Json(object)| object));
    let payload = request.into_payload()?;

    Ok(state.upstream.register(&payload).await?)
}
