//! POST /chat - run one conversational exchange.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use localchat_infra::metrics;
use localchat_types::chat::{ChatRequest, ChatResponse, PerformanceStats};

use crate::http::error::AppError;
use crate::state::AppState;

/// Handle a chat request and shape the service reply into the wire format.
///
/// Body rejections (unparseable JSON, missing `message`) are folded into
/// the same validation envelope as field-level failures.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::malformed_body(rejection.body_text()))?;

    let reply = state.chat_service.chat(&request).await?;

    Ok(Json(ChatResponse {
        response: reply.response,
        conversation_id: reply.conversation_id,
        timestamp: reply.timestamp.to_rfc3339(),
        performance: PerformanceStats {
            time_seconds: round_to(reply.generation_seconds, 2),
            memory_usage: round_to(metrics::resident_memory_mib(), 1),
        },
    }))
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
