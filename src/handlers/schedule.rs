use crate::{AppState, Result};
use axum::{extract::State, Json};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::models::{self, ScheduleRequest};
use crate::upstream::UpstreamReply;

pub async fn schedule(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Map<String, Value>>>,
) -> Result<UpstreamReply> {
    tracing::info!("Received interview schedule request");

    let request: ScheduleRequest = models::from_object(body.map(|Json(object)| object));
    let payload = request.into_payload()?;

    Ok(state.upstream.schedule(&payload).await?)
}
