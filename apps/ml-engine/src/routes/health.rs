use axum::Json;
use serde_json::{json, Value};

use crate::config::SERVICE_NAME;

/// GET /health
/// Liveness only; no dependency checks.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    }))
}
