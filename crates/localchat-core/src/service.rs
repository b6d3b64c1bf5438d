//! Chat request orchestration.
//!
//! [`ChatService`] ties the session store, prompt builder, parameter
//! normalizer, and inference engine together into the single
//! validate/generate/record pipeline behind `POST /chat`. Any failure
//! before the final record step leaves the session untouched.

use std::time::Duration;

use chrono::{DateTime, Utc};
use localchat_types::chat::{ChatRequest, Turn};
use localchat_types::error::{ChatError, FieldError};
use tokio::time::Instant;
use tracing::{info, warn};

use crate::engine::InferenceEngine;
use crate::params;
use crate::prompt::{self, PromptBuilder};
use crate::session::SessionStore;

/// Maximum accepted length of the `message` field, in characters.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Maximum accepted length of a caller-supplied `conversation_id`.
pub const MAX_CONVERSATION_ID_CHARS: usize = 50;

/// Outcome of a successful chat call, before HTTP shaping.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub response: String,
    pub conversation_id: String,
    pub timestamp: DateTime<Utc>,
    pub generation_seconds: f64,
}

/// Orchestrates one chat exchange end to end.
///
/// Generic over the engine so tests can script it; the binary pins the
/// HTTP implementation via a type alias.
#[derive(Debug)]
pub struct ChatService<E> {
    store: SessionStore,
    engine: E,
    prompt_builder: PromptBuilder,
    generation_timeout: Duration,
}

impl<E: InferenceEngine> ChatService<E> {
    pub fn new(engine: E, system_prompt: Option<String>, generation_timeout: Duration) -> Self {
        let preamble =
            system_prompt.unwrap_or_else(|| prompt::DEFAULT_SYSTEM_PROMPT.to_string());
        Self {
            store: SessionStore::new(),
            engine,
            prompt_builder: PromptBuilder::new(preamble),
            generation_timeout,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Run one full exchange: validate, normalize, generate, record.
    ///
    /// The history snapshot is taken before the engine call, so a slow
    /// generation never holds a store lock. The session is only mutated
    /// after the reply has been extracted successfully.
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ChatError> {
        validate(request)?;
        let params = params::normalize(
            request.max_length.as_ref(),
            request.temperature.as_ref(),
        )?;

        let conversation_id = request
            .conversation_id
            .clone()
            .unwrap_or_else(SessionStore::generate_id);

        let history = self.store.get_or_create(&conversation_id);
        let prompt = self.prompt_builder.build(&history, &request.message);

        info!(
            conversation_id = %conversation_id,
            history_turns = history.len(),
            max_new_tokens = params.max_new_tokens,
            temperature = params.temperature,
            "running generation"
        );

        let started = Instant::now();
        let raw = match tokio::time::timeout(
            self.generation_timeout,
            self.engine.generate(&prompt, &params),
        )
        .await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                warn!(conversation_id = %conversation_id, error = %e, "generation failed");
                return Err(e.into());
            }
            Err(_) => {
                warn!(conversation_id = %conversation_id, "generation timed out");
                return Err(ChatError::GenerationFailure(format!(
                    "generation timed out after {}s",
                    self.generation_timeout.as_secs()
                )));
            }
        };
        let generation_seconds = started.elapsed().as_secs_f64();

        let response = prompt::extract_reply(&raw)?;
        self.store.append_turns(
            &conversation_id,
            Turn::user(request.message.clone()),
            Turn::assistant(response.clone()),
        );

        Ok(ChatReply {
            response,
            conversation_id,
            timestamp: Utc::now(),
            generation_seconds,
        })
    }
}

fn validate(request: &ChatRequest) -> Result<(), ChatError> {
    let mut errors = Vec::new();

    if request.message.is_empty() {
        errors.push(FieldError::new("message", "must not be empty"));
    } else if request.message.chars().count() > MAX_MESSAGE_CHARS {
        errors.push(FieldError::new(
            "message",
            format!("must be at most {MAX_MESSAGE_CHARS} characters"),
        ));
    }

    if let Some(id) = &request.conversation_id {
        if id.chars().count() > MAX_CONVERSATION_ID_CHARS {
            errors.push(FieldError::new(
                "conversation_id",
                format!("must be at most {MAX_CONVERSATION_ID_CHARS} characters"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ChatError::InvalidRequest(errors))
    }
}
