//! ReviewDigest LLM Integration
//!
//! OpenAI-compatible API client and review summarization pipeline

mod artifact;
mod client;
mod format;
mod language;
mod llm_trait;
mod prompts;
mod summarize;
mod types;

pub use artifact::{PromptArtifact, PromptDemo};
pub use client::OpenAiClient;
pub use format::format_reviews;
pub use language::SupportedLanguage;
pub use llm_trait::LlmClient;
pub use prompts::{stylize_user_prompt, summarize_user_prompt, FACTUAL_INSTRUCTIONS};
pub use summarize::ReviewSummarizer;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, CompletionRequest};
