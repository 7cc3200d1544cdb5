use reviewdigest_common::{AppConfig, Result};
use reviewdigest_llm::{OpenAiClient, PromptArtifact, ReviewSummarizer};
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup; all fields are read-only during request handling,
/// so handlers need no locking.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarization pipeline
    pub summarizer: Arc<ReviewSummarizer>,
}

impl AppState {
    /// Create new application state
    ///
    /// Loads the prompt artifact eagerly; a missing or malformed artifact
    /// aborts startup instead of failing on the first request.
    pub fn new(config: AppConfig) -> Result<Self> {
        let artifact = PromptArtifact::load(&config.prompt_artifact_path)?;

        let client = OpenAiClient::new(
            config.llm_base_url.clone(),
            config.llm_api_key.clone(),
            config.llm_model.clone(),
        )?;

        let summarizer = Arc::new(ReviewSummarizer::new(
            Arc::new(client),
            artifact,
            config.pipeline_policy,
        ));

        Ok(Self { config, summarizer })
    }
}
