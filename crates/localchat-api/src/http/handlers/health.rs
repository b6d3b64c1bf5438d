//! GET /health - liveness and engine readiness probe.

use axum::Json;
use axum::extract::State;
use localchat_core::engine::InferenceEngine;

use crate::state::AppState;

/// Report server status, engine readiness, device, and live session count.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let engine = state.chat_service.engine();
    Json(serde_json::json!({
        "status": "OK",
        "model_loaded": engine.is_ready().await,
        "device": engine.device(),
        "conversations": state.chat_service.store().len(),
    }))
}
