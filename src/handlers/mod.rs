pub mod register;
pub mod schedule;
pub mod upload;

use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "app": env!("CARGO_PKG_NAME")
    }))
}
