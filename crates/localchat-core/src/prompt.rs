//! Prompt assembly and reply extraction for TinyLlama-style chat markers.
//!
//! The engine consumes a single flat string; this module is the only place
//! that knows the marker grammar. [`PromptBuilder::build`] renders history
//! into that grammar and [`extract_reply`] inverts it on the way back out.

use localchat_types::chat::Turn;
use localchat_types::error::ChatError;

pub const SYSTEM_MARKER: &str = "<|system|>";
pub const USER_MARKER: &str = "<|user|>";
pub const ASSISTANT_MARKER: &str = "<|assistant|>";
pub const END_MARKER: &str = "</s>";

/// How many trailing history turns are rendered into the prompt. The store
/// may retain more; the prompt window is deliberately narrower.
pub const HISTORY_WINDOW: usize = 6;

/// Preamble used when the configuration does not override it.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant.";

/// Stateless renderer from (preamble, history, message) to prompt text.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    preamble: String,
}

impl PromptBuilder {
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            preamble: preamble.into(),
        }
    }

    /// Render the full prompt: system preamble, the last
    /// [`HISTORY_WINDOW`] turns, the new user message, and a trailing open
    /// assistant marker for the engine to continue from.
    pub fn build(&self, history: &[Turn], message: &str) -> String {
        let mut prompt = String::new();
        prompt.push_str(SYSTEM_MARKER);
        prompt.push('\n');
        prompt.push_str(&self.preamble);
        prompt.push_str(END_MARKER);
        prompt.push('\n');

        let start = history.len().saturating_sub(HISTORY_WINDOW);
        for turn in &history[start..] {
            prompt.push_str(&format!("<|{}|>", turn.role));
            prompt.push_str(&turn.content);
            prompt.push_str(END_MARKER);
            prompt.push('\n');
        }

        prompt.push_str(USER_MARKER);
        prompt.push_str(message);
        prompt.push_str(END_MARKER);
        prompt.push('\n');
        prompt.push_str(ASSISTANT_MARKER);
        prompt
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}

/// Pull the assistant's reply out of raw engine output.
///
/// The reply is everything after the last assistant marker, cut at the
/// first end marker that follows it, trimmed. Output without an assistant
/// marker, or with nothing left after trimming, is malformed.
pub fn extract_reply(raw: &str) -> Result<String, ChatError> {
    let after = raw
        .rfind(ASSISTANT_MARKER)
        .map(|pos| &raw[pos + ASSISTANT_MARKER.len()..])
        .ok_or(ChatError::MalformedGenerationOutput)?;
    let reply = after
        .split(END_MARKER)
        .next()
        .unwrap_or("")
        .trim()
        .to_string();
    if reply.is_empty() {
        return Err(ChatError::MalformedGenerationOutput);
    }
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_without_history() {
        let builder = PromptBuilder::default();
        let prompt = builder.build(&[], "Hello");
        assert_eq!(
            prompt,
            "<|system|>\nYou are a helpful AI assistant.</s>\n<|user|>Hello</s>\n<|assistant|>"
        );
    }

    #[test]
    fn test_build_renders_history_in_order() {
        let builder = PromptBuilder::new("Be terse.");
        let history = vec![Turn::user("Hi"), Turn::assistant("Hello!")];
        let prompt = builder.build(&history, "How are you?");
        assert_eq!(
            prompt,
            "<|system|>\nBe terse.</s>\n\
             <|user|>Hi</s>\n\
             <|assistant|>Hello!</s>\n\
             <|user|>How are you?</s>\n\
             <|assistant|>"
        );
    }

    #[test]
    fn test_build_windows_to_last_six_turns() {
        let builder = PromptBuilder::default();
        let history: Vec<Turn> = (0..10)
            .map(|n| {
                if n % 2 == 0 {
                    Turn::user(format!("q{n}"))
                } else {
                    Turn::assistant(format!("a{n}"))
                }
            })
            .collect();
        let prompt = builder.build(&history, "latest");
        // Turns 0..4 fall outside the window.
        assert!(!prompt.contains("q0"));
        assert!(!prompt.contains("a3"));
        assert!(prompt.contains("q4"));
        assert!(prompt.contains("a9"));
        assert!(prompt.ends_with("<|assistant|>"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = PromptBuilder::default();
        let history = vec![Turn::user("a"), Turn::assistant("b")];
        assert_eq!(
            builder.build(&history, "c"),
            builder.build(&history, "c")
        );
    }

    #[test]
    fn test_extract_reply_simple() {
        let raw = "<|user|>Hi</s>\n<|assistant|> Hello there! </s>";
        assert_eq!(extract_reply(raw).unwrap(), "Hello there!");
    }

    #[test]
    fn test_extract_reply_uses_last_assistant_marker() {
        let raw = "<|assistant|>old turn</s>\n<|user|>more</s>\n<|assistant|>new reply</s>extra";
        assert_eq!(extract_reply(raw).unwrap(), "new reply");
    }

    #[test]
    fn test_extract_reply_without_end_marker_takes_tail() {
        let raw = "<|assistant|>unterminated reply";
        assert_eq!(extract_reply(raw).unwrap(), "unterminated reply");
    }

    #[test]
    fn test_extract_reply_missing_marker_is_malformed() {
        let err = extract_reply("no markers here").unwrap_err();
        assert!(matches!(err, ChatError::MalformedGenerationOutput));
    }

    #[test]
    fn test_extract_reply_empty_after_trim_is_malformed() {
        let err = extract_reply("<|assistant|>   </s>").unwrap_err();
        assert!(matches!(err, ChatError::MalformedGenerationOutput));
    }
}
