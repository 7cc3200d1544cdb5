use reviewdigest_common::{PipelinePolicy, Result, ReviewDigestError};
use std::sync::Arc;
use tracing::{debug, info};

use crate::artifact::PromptArtifact;
use crate::language::SupportedLanguage;
use crate::llm_trait::LlmClient;
use crate::prompts::{stylize_user_prompt, summarize_user_prompt, FACTUAL_INSTRUCTIONS};
use crate::types::CompletionRequest;

const DEFAULT_STYLIZE_INSTRUCTIONS: &str =
    "Rewrite the summary so that readers are more likely to purchase. Keep every factual claim.";

/// Review summarization pipeline
///
/// Configured once at startup with an immutable prompt artifact and a fixed
/// policy; shared read-only across all requests.
pub struct ReviewSummarizer {
    client: Arc<dyn LlmClient>,
    artifact: PromptArtifact,
    policy: PipelinePolicy,
}

impl ReviewSummarizer {
    /// Create new summarizer
    pub fn new(client: Arc<dyn LlmClient>, artifact: PromptArtifact, policy: PipelinePolicy) -> Self {
        Self {
            client,
            artifact,
            policy,
        }
    }

    /// Summarize formatted review markdown into the target language
    ///
    /// Runs one or two sequential completion calls depending on the policy.
    /// Any downstream failure propagates as a single `Llm` error; no retry.
    pub async fn summarize(
        &self,
        reviews_md: &str,
        language: SupportedLanguage,
    ) -> Result<String> {
        info!(
            "Starting summarization - Reviews length: {} chars, Language: {}",
            reviews_md.len(),
            language
        );

        let summary = match self.policy {
            PipelinePolicy::Persuasive => self.summarize_persuasive(reviews_md, language).await?,
            PipelinePolicy::FactualStylized => {
                let draft = self.summarize_factual(reviews_md, language).await?;
                debug!("Factual draft complete - Length: {} chars", draft.len());
                self.stylize(&draft, language).await?
            }
        };

        info!("Summarization complete - Summary length: {} chars", summary.len());

        Ok(summary)
    }

    /// Single-stage persuasive summary
    async fn summarize_persuasive(
        &self,
        reviews_md: &str,
        language: SupportedLanguage,
    ) -> Result<String> {
        let request = CompletionRequest {
            system: self.artifact.system_prompt(&self.artifact.instructions),
            user: summarize_user_prompt(reviews_md, language),
            temperature: Some(0.3),
            max_tokens: Some(1000),
        };

        self.run_stage(request).await
    }

    /// Stage 1 of the two-stage policy: neutral factual draft
    async fn summarize_factual(
        &self,
        reviews_md: &str,
        language: SupportedLanguage,
    ) -> Result<String> {
        let request = CompletionRequest {
            system: self.artifact.system_prompt(FACTUAL_INSTRUCTIONS),
            user: summarize_user_prompt(reviews_md, language),
            temperature: Some(0.2),
            max_tokens: Some(1000),
        };

        self.run_stage(request).await
    }

    /// Stage 2 of the two-stage policy: persuasive restyle
    ///
    /// The draft goes in verbatim; only the system instructions change.
    async fn stylize(&self, draft: &str, language: SupportedLanguage) -> Result<String> {
        let instructions = self
            .artifact
            .stylize_instructions
            .as_deref()
            .unwrap_or(DEFAULT_STYLIZE_INSTRUCTIONS);

        let request = CompletionRequest {
            system: instructions.to_string(),
            user: stylize_user_prompt(draft, language),
            temperature: Some(0.5),
            max_tokens: Some(1000),
        };

        self.run_stage(request).await
    }

    /// Run one stage, folding any client failure into an Llm error
    async fn run_stage(&self, request: CompletionRequest) -> Result<String> {
        self.client
            .complete(request)
            .await
            .map_err(|e| ReviewDigestError::llm(e.to_string()))
    }
}
