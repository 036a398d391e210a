use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use tracing::instrument;

pub(super) fn router() -> Router {
    Router::new().route("/health", get(health_check))
}

#[instrument]
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "project-hub"
    }))
}
