//! Conversation turn and wire types for the chat endpoint.
//!
//! A [`Turn`] is one message unit in a conversation, tagged with the speaker
//! [`Role`]. [`ChatRequest`] and [`ChatResponse`] are the JSON shapes of the
//! `POST /chat` endpoint.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Speaker role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// One exchange unit in a conversation: a role and its message text.
///
/// Turns are immutable once created; the session store only ever appends
/// and evicts whole turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request body for `POST /chat`.
///
/// `max_length` and `temperature` stay as raw JSON values here: the original
/// interface accepts either a number or a numeric string for both, so the
/// parameter normalizer (not serde) decides whether they parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    /// The user message, 1-1000 characters.
    pub message: String,
    /// Existing conversation to continue; a new id is generated when absent.
    pub conversation_id: Option<String>,
    /// Maximum new tokens to generate (number or numeric string).
    pub max_length: Option<serde_json::Value>,
    /// Sampling temperature (number or numeric string).
    pub temperature: Option<serde_json::Value>,
}

/// Response body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub conversation_id: String,
    /// RFC 3339 timestamp of when the response was produced.
    pub timestamp: String,
    pub performance: PerformanceStats,
}

/// Timing and memory figures attached to every chat response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Wall-clock seconds spent in the inference engine, rounded to 2 decimals.
    pub time_seconds: f64,
    /// Process resident memory in MiB, rounded to 1 decimal.
    pub memory_usage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::User, Role::Assistant] {
            let s = role.to_string();
            let parsed: Role = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Role::Assistant);
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert!("system".parse::<Role>().is_err());
    }

    #[test]
    fn test_turn_constructors() {
        let turn = Turn::user("hello");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.content, "hello");

        let turn = Turn::assistant("hi there");
        assert_eq!(turn.role, Role::Assistant);
    }

    #[test]
    fn test_chat_request_minimal() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert_eq!(req.message, "hello");
        assert!(req.conversation_id.is_none());
        assert!(req.max_length.is_none());
        assert!(req.temperature.is_none());
    }

    #[test]
    fn test_chat_request_accepts_numeric_strings() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"message": "hi", "max_length": "200", "temperature": 0.5}"#,
        )
        .unwrap();
        assert_eq!(req.max_length, Some(serde_json::json!("200")));
        assert_eq!(req.temperature, Some(serde_json::json!(0.5)));
    }

    #[test]
    fn test_chat_request_missing_message_rejected() {
        let result = serde_json::from_str::<ChatRequest>(r#"{"conversation_id": "abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_response_serialize() {
        let resp = ChatResponse {
            response: "hello".to_string(),
            conversation_id: "session_123".to_string(),
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            performance: PerformanceStats {
                time_seconds: 1.23,
                memory_usage: 412.5,
            },
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"time_seconds\":1.23"));
        assert!(json.contains("\"memory_usage\":412.5"));
    }
}
