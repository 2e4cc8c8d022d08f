use axum::Json;
use serde_json::{json, Value};

/// Liveness endpoint
pub async fn liveness() -> Json<Value> {
    Json(json!({
        "message": "Axis PDF Generator is live. Use POST /generate-axis-disposal-pdf/"
    }))
}
