//! Infrastructure implementations for localchat.
//!
//! Provides the HTTP [`engine::HttpCompletionEngine`] backing the
//! `InferenceEngine` port from `localchat-core`, plus process memory
//! sampling for the performance block in chat responses.

pub mod engine;
pub mod metrics;
