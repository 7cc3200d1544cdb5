use crate::types::CompletionRequest;
use async_trait::async_trait;
use reviewdigest_common::Result;

/// Common trait for LLM clients
///
/// The pipeline only depends on this trait, so tests can substitute a fake
/// for the real provider client.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run one text-generation call
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
