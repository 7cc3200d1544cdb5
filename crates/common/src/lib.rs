pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, PipelinePolicy};
pub use error::ReviewDigestError;
pub type Result<T> = std::result::Result<T, ReviewDigestError>;
