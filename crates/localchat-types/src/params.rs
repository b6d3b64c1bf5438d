//! Generation parameter types and their safe operating ranges.
//!
//! [`GenerationParams`] is derived per-request from caller input by the
//! parameter normalizer in `localchat-core`; it is never persisted.

use serde::{Deserialize, Serialize};

/// Default for `max_length` when the caller omits it.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 150;

/// Default for `temperature` when the caller omits it.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Inclusive bounds for `max_length`.
pub const MAX_NEW_TOKENS_RANGE: (i64, i64) = (50, 500);

/// Inclusive bounds for `temperature`.
pub const TEMPERATURE_RANGE: (f64, f64) = (0.1, 1.0);

/// Normalized generation parameters, guaranteed within the safe ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
