use serde::{Deserialize, Serialize};

/// Provider-agnostic input for one pipeline stage
///
/// One `CompletionRequest` maps to exactly one downstream text-generation
/// call. A concrete client translates it into its provider's wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instructions for the stage
    pub system: String,

    /// User content (review markdown or the previous stage's output)
    pub user: String,

    /// Temperature (0.0 - 1.0)
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

/// Chat message (OpenAI wire format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("system", "user", "assistant")
    pub role: String,

    /// Message content
    pub content: String,
}

/// Chat completion request (OpenAI wire format)
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model name (e.g., "gpt-4.1-nano")
    pub model: String,

    /// Conversation messages
    pub messages: Vec<ChatMessage>,

    /// Temperature (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Chat completion response (OpenAI wire format)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices
    pub choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Generated message
    pub message: ChatMessage,
}

impl ChatResponse {
    /// Content of the first choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|c| c.message.content.as_str())
    }
}
