//! Inference engine backends.

pub mod http;

pub use http::HttpCompletionEngine;
