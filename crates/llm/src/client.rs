use async_trait::async_trait;
use reqwest::Client;
use reviewdigest_common::Result;
use tracing::{debug, info, warn};

use crate::llm_trait::LlmClient;
use crate::types::{ChatMessage, ChatRequest, ChatResponse, CompletionRequest};

/// OpenAI-compatible chat completions client
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl OpenAiClient {
    /// Create new client
    ///
    /// A missing API key is tolerated here so startup never fails on it;
    /// every completion call will then fail with the provider's auth error.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120)) // LLM calls are slow
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        if api_key.is_none() {
            warn!("No API key configured; completion calls will fail downstream");
        }
        info!("LLM client initialized: {} (model: {})", base_url, model);

        Ok(Self {
            base_url,
            api_key,
            model,
            client,
        })
    }

    /// Single attempt at one chat completion call
    ///
    /// No retry by design: a failed call surfaces to the caller as-is.
    async fn try_complete(&self, request: &CompletionRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user.clone(),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut http_request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            http_request = http_request.bearer_auth(key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send completion request: {}", e))?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("LLM API error: {}", e))?;

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to parse completion response: {}", e))?;

        let content = result
            .first_content()
            .ok_or_else(|| anyhow::anyhow!("No choices in completion response"))?;

        if content.is_empty() {
            return Err(anyhow::anyhow!("Empty completion response").into());
        }

        Ok(content.to_string())
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        debug!(
            "Sending completion request - Model: {}, System length: {}, User length: {}",
            self.model,
            request.system.len(),
            request.user.len()
        );

        let response = self.try_complete(&request).await?;

        debug!("Received completion response - Length: {}", response.len());

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_without_api_key() {
        let client = OpenAiClient::new("https://api.openai.com/v1", None, "gpt-4.1-nano");
        assert!(client.is_ok());
    }
}
