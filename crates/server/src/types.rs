use chrono::{DateTime, Utc};
use reviewdigest_llm::SupportedLanguage;
use serde::{Deserialize, Serialize};

/// A single user review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Free-text review content
    pub review: String,
}

/// Summarization request
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Ordered batch of reviews
    pub reviews: Vec<Review>,

    /// Desired output language for the summary
    pub output_language: SupportedLanguage,
}

/// Metadata about one summarization
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryMetadata {
    /// Input language code
    pub input_language: String,

    /// Output language code
    pub output_language: String,

    /// Generation timestamp (UTC)
    pub timestamp: DateTime<Utc>,
}

/// Summarization response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Final summary text
    pub summary: String,

    /// Request metadata
    pub metadata: SummaryMetadata,
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error detail
    pub detail: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}
