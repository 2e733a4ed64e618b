//! Provider-neutral completion request and response types.

use serde::{Deserialize, Serialize};

/// Roles in a chat-style completion request.
///
/// # Examples
///
/// ```
/// use questwright_core::Role;
///
/// assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Standing instructions
    System,
    /// The assembled prompt
    User,
    /// Model output
    Assistant,
}

impl Role {
    /// Wire name, as chat completion endpoints expect it.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Everything a driver needs to perform one completion.
///
/// # Examples
///
/// ```
/// use questwright_core::{ChatMessage, CompletionRequest};
///
/// let request = CompletionRequest {
///     model: "gpt-3.5-turbo".to_string(),
///     messages: vec![ChatMessage::user("Write a one-shot.")],
///     temperature: 0.7,
///     max_tokens: 3000,
/// };
///
/// assert_eq!(request.prompt_len(), "Write a one-shot.".len());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier to use
    pub model: String,
    /// Conversation messages to send
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Total characters across all messages.
    pub fn prompt_len(&self) -> usize {
        self.messages.iter().map(|m| m.content.len()).sum()
    }
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct TokenUsage {
    /// Tokens in the prompt.
    prompt_tokens: u64,
    /// Tokens in the response.
    completion_tokens: u64,
    /// Prompt plus completion.
    total_tokens: u64,
}

impl TokenUsage {
    /// Create a usage record.
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Raw result of a completion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text, trimmed
    pub text: String,
    /// Model that answered
    pub model: String,
    /// Usage, when the provider reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

/// A finished adventure: opaque markdown plus the model that wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedAdventure {
    /// Markdown text
    text: String,
    /// Model identifier
    model: String,
}

impl GeneratedAdventure {
    /// Wrap generated text. Returns `None` when the text is blank.
    pub fn new(text: impl Into<String>, model: impl Into<String>) -> Option<Self> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text,
            model: model.into(),
        })
    }

    /// Consume the adventure, keeping the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_usage_totals() {
        let usage = TokenUsage::new(100, 50);
        assert_eq!(*usage.total_tokens(), 150);
    }

    #[test]
    fn blank_adventures_are_rejected() {
        assert!(GeneratedAdventure::new("  \n", "gpt-4o").is_none());
        let adventure = GeneratedAdventure::new("  # Prologue\n", "gpt-4o").unwrap();
        assert_eq!(adventure.text(), "# Prologue");
    }

    #[test]
    fn messages_serialize_openai_style() {
        let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }
}
