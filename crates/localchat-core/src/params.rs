//! Normalization of caller-supplied generation parameters.
//!
//! Callers may send numbers or numeric strings for `max_length` and
//! `temperature`. Anything parseable is clamped into the safe operating
//! ranges; anything else is rejected with the offending field named.

use localchat_types::error::ChatError;
use localchat_types::params::{
    DEFAULT_MAX_NEW_TOKENS, DEFAULT_TEMPERATURE, GenerationParams, MAX_NEW_TOKENS_RANGE,
    TEMPERATURE_RANGE,
};
use serde_json::Value;

/// Resolve raw request values into [`GenerationParams`].
///
/// Absent fields take the defaults. Out-of-range values clamp to the nearest
/// bound rather than erroring, so callers probing the limits still get a
/// usable request.
pub fn normalize(
    max_length: Option<&Value>,
    temperature: Option<&Value>,
) -> Result<GenerationParams, ChatError> {
    let max_new_tokens = match max_length {
        Some(value) => {
            let requested = parse_int(value, "max_length")?;
            let (lo, hi) = MAX_NEW_TOKENS_RANGE;
            requested.clamp(lo, hi) as u32
        }
        None => DEFAULT_MAX_NEW_TOKENS,
    };

    let temperature = match temperature {
        Some(value) => {
            let requested = parse_float(value, "temperature")?;
            let (lo, hi) = TEMPERATURE_RANGE;
            requested.clamp(lo, hi)
        }
        None => DEFAULT_TEMPERATURE,
    };

    Ok(GenerationParams {
        max_new_tokens,
        temperature,
    })
}

/// Accept a JSON number (floats truncate toward zero) or a numeric string.
fn parse_int(value: &Value, field: &'static str) -> Result<i64, ChatError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| invalid(field, value)),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid(field, value)),
        _ => Err(invalid(field, value)),
    }
}

/// Accept a JSON number or a numeric string; non-finite values are rejected
/// since they would defeat the clamp.
fn parse_float(value: &Value, field: &'static str) -> Result<f64, ChatError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(invalid(field, value)),
    }
}

fn invalid(field: &'static str, value: &Value) -> ChatError {
    ChatError::InvalidParameter {
        field,
        message: format!("cannot interpret {value} as a number"),
    }
}
