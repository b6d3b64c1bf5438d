//! Port to the text generation engine.

use localchat_types::error::EngineError;
use localchat_types::params::GenerationParams;

/// Abstraction over the completion backend.
///
/// `localchat-infra` provides the HTTP implementation; tests substitute
/// scripted stubs. Implementations must be cheap to call concurrently.
pub trait InferenceEngine: Send + Sync {
    /// Device label the engine runs on, surfaced by the health endpoint.
    fn device(&self) -> &str;

    /// Whether the engine is reachable and able to serve generations.
    fn is_ready(&self) -> impl std::future::Future<Output = bool> + Send;

    /// Run one completion over the fully rendered prompt.
    ///
    /// The returned text is the full generation transcript, prompt included.
    /// Backends that only return the continuation must re-attach the prompt
    /// so the reply extractor can find the trailing assistant marker.
    fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> impl std::future::Future<Output = Result<String, EngineError>> + Send;
}
