//! Mapping from pipeline errors to the HTTP error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use localchat_types::error::{ChatError, FieldError};
use serde_json::json;
use tracing::error;

/// Application-level error that maps to HTTP responses.
///
/// Client mistakes become 422 with a per-field `errors` list; engine and
/// parsing failures become 500 with only a `detail` message.
#[derive(Debug)]
pub struct AppError(ChatError);

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError(e)
    }
}

impl AppError {
    /// Reject a request body that never produced a [`localchat_types::chat::ChatRequest`].
    pub fn malformed_body(message: impl Into<String>) -> Self {
        AppError(ChatError::InvalidRequest(vec![FieldError::new(
            "body",
            message,
        )]))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail, errors) = match self.0 {
            ChatError::InvalidRequest(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error".to_string(),
                errors,
            ),
            ChatError::InvalidParameter { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation error".to_string(),
                vec![FieldError::new(field, message)],
            ),
            e @ (ChatError::MalformedGenerationOutput | ChatError::GenerationFailure(_)) => {
                error!(error = %e, "chat request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error generating response: {e}"),
                    Vec::new(),
                )
            }
        };

        let mut body = json!({ "detail": detail });
        if !errors.is_empty() {
            body["errors"] = json!(errors);
        }

        (status, axum::Json(body)).into_response()
    }
}
