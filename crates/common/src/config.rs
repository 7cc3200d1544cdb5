use crate::error::ReviewDigestError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pipeline policy selection
///
/// A small closed set of named pipeline configurations. The policy is fixed
/// at startup and never varies per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelinePolicy {
    /// Single stage: persuasive summary directly
    Persuasive,

    /// Two stages: neutral factual draft, then persuasive restyle
    FactualStylized,
}

impl PipelinePolicy {
    /// Parse policy from its config string
    pub fn parse(s: &str) -> Result<Self, ReviewDigestError> {
        match s {
            "persuasive" => Ok(Self::Persuasive),
            "factual-stylized" => Ok(Self::FactualStylized),
            other => Err(ReviewDigestError::config(format!(
                "Unknown pipeline policy '{}' (expected 'persuasive' or 'factual-stylized')",
                other
            ))),
        }
    }
}

/// ReviewDigest application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// LLM provider API base URL
    pub llm_base_url: String,

    /// LLM provider API key (requests fail downstream when absent)
    pub llm_api_key: Option<String>,

    /// LLM model name
    pub llm_model: String,

    /// Path to the optimized prompt artifact
    pub prompt_artifact_path: PathBuf,

    /// Pipeline policy
    pub pipeline_policy: PipelinePolicy,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm_base_url: "https://api.openai.com/v1".to_string(),
            llm_api_key: None,
            llm_model: "gpt-4.1-nano".to_string(),
            prompt_artifact_path: PathBuf::from("./prompt/optimized_summarizer.json"),
            pipeline_policy: PipelinePolicy::Persuasive,
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, ReviewDigestError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let pipeline_policy = match std::env::var("PIPELINE_POLICY") {
            Ok(s) => PipelinePolicy::parse(&s)?,
            Err(_) => PipelinePolicy::Persuasive,
        };

        let config = Self {
            llm_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            llm_api_key: std::env::var("OPENAI_API_KEY").ok(),
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| "gpt-4.1-nano".to_string()),
            prompt_artifact_path: Self::get_env_path("PROMPT_ARTIFACT_PATH")
                .unwrap_or_else(|| PathBuf::from("./prompt/optimized_summarizer.json")),
            pipeline_policy,
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            log_dir: Self::get_env_path("LOG_DIR")
                .unwrap_or_else(|| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ReviewDigestError> {
        if self.llm_model.is_empty() {
            return Err(ReviewDigestError::config("LLM model name cannot be empty"));
        }

        if !self.llm_base_url.starts_with("http://")
            && !self.llm_base_url.starts_with("https://") {
            return Err(ReviewDigestError::config(
                "LLM base URL must start with http:// or https://"
            ));
        }

        if self.server_port == 0 {
            return Err(ReviewDigestError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
