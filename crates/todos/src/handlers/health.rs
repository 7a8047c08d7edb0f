use axum::Json;
use serde_json::{json, Value};

/// GET / - Service banner.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Todo API",
        "status": "ready"
    }))
}

/// GET /health - Liveness check. Does not touch storage.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
