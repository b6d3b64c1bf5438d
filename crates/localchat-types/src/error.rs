use serde::Serialize;
use thiserror::Error;

/// One invalid field in a rejected request, reported in the error envelope's
/// `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors surfaced by the chat request pipeline.
///
/// The first two variants are client errors; the last two are server errors.
/// None of them leave a session partially mutated.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Missing or malformed request fields.
    #[error("invalid request")]
    InvalidRequest(Vec<FieldError>),

    /// A generation parameter could not be parsed as a number.
    #[error("invalid parameter '{field}': {message}")]
    InvalidParameter {
        field: &'static str,
        message: String,
    },

    /// The engine output lacked the expected assistant marker.
    #[error("generation output missing assistant marker")]
    MalformedGenerationOutput,

    /// The inference engine reported an internal error or timed out.
    #[error("generation failed: {0}")]
    GenerationFailure(String),
}

impl From<EngineError> for ChatError {
    fn from(e: EngineError) -> Self {
        ChatError::GenerationFailure(e.to_string())
    }
}

/// Errors from the inference engine collaborator.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request never reached the engine (connect, transport, timeout).
    #[error("engine request failed: {0}")]
    Request(String),

    /// The engine answered with a non-success status.
    #[error("engine returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The engine response body could not be decoded.
    #[error("engine response decode error: {0}")]
    Decode(String),
}

/// Errors loading the server configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
