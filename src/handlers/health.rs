use axum::{extract::State, http::Uri, Json};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "moodlog-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn readyz(State(state): State<AppState>) -> Json<Value> {
    let entries = state.dashboard.read().await.log.len();
    Json(json!({
        "status": "ready",
        "checks": { "mood_log": "ok" },
        "entries": entries,
    }))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
