//! Application state shared across HTTP handlers.
//!
//! The chat service is generic over the engine; the binary pins it to the
//! HTTP completion client here.

use std::sync::Arc;
use std::time::Duration;

use localchat_core::service::ChatService;
use localchat_infra::engine::HttpCompletionEngine;
use localchat_types::config::ServerConfig;

/// Chat service pinned to the HTTP engine implementation.
pub type ConcreteChatService = ChatService<HttpCompletionEngine>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let timeout = Duration::from_secs(config.generation_timeout_secs);
        let engine = HttpCompletionEngine::new(&config.engine_url, &config.device, timeout);
        let chat_service = ChatService::new(engine, config.system_prompt.clone(), timeout);

        Self {
            chat_service: Arc::new(chat_service),
        }
    }
}
