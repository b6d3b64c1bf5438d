//! HTTP client for a llama.cpp-server-style completion endpoint.

use std::time::Duration;

use localchat_core::engine::InferenceEngine;
use localchat_types::error::EngineError;
use localchat_types::params::GenerationParams;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct CompletionRequestBody<'a> {
    prompt: &'a str,
    n_predict: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct CompletionResponseBody {
    content: String,
}

/// `InferenceEngine` backed by a local completion server.
///
/// Speaks the llama.cpp server wire format: `POST /completion` with
/// `prompt`/`n_predict`/`temperature`, readiness via `GET /health`.
#[derive(Debug, Clone)]
pub struct HttpCompletionEngine {
    client: reqwest::Client,
    base_url: String,
    device: String,
}

impl HttpCompletionEngine {
    pub fn new(base_url: &str, device: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            device: device.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl InferenceEngine for HttpCompletionEngine {
    fn device(&self) -> &str {
        &self.device
    }

    async fn is_ready(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, EngineError> {
        let body = CompletionRequestBody {
            prompt,
            n_predict: params.max_new_tokens,
            temperature: params.temperature,
        };

        let response = self
            .client
            .post(self.url("/completion"))
            .json(&body)
            .send()
            .await
            .map_err(|e| EngineError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EngineError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponseBody = response
            .json()
            .await
            .map_err(|e| EngineError::Decode(e.to_string()))?;

        debug!(chars = completion.content.len(), "completion received");

        // The server returns only the continuation. Re-attach the prompt so
        // the transcript keeps its trailing assistant marker for extraction.
        Ok(format!("{prompt}{}", completion.content))
    }
}
