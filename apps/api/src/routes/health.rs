use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe with a timestamp, for uptime monitors.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Factoid bilingual API is running",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// GET /
/// Static capability listing for API discovery.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Factoid API",
        "endpoints": {
            "health": "GET /health",
            "facts": "POST /facts",
            "randomWords": "GET /random-words",
        },
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
