use reviewdigest_common::{ReviewDigestError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Optimized prompt artifact
///
/// Externally authored instruction/example set. Loaded once at startup and
/// never mutated; versioned by file content, not by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptArtifact {
    /// Artifact version label
    #[serde(default)]
    pub version: Option<String>,

    /// System instructions for the summarize stage
    pub instructions: String,

    /// System instructions for the stylize stage (two-stage policy only)
    #[serde(default)]
    pub stylize_instructions: Option<String>,

    /// Few-shot examples
    #[serde(default)]
    pub demos: Vec<PromptDemo>,
}

/// One few-shot example
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptDemo {
    /// Example review markdown
    pub reviews: String,

    /// Example summary
    pub summary: String,
}

impl PromptArtifact {
    /// Load artifact from a JSON file
    ///
    /// A missing or malformed artifact is a configuration error; callers load
    /// eagerly at startup so this fails the process, not a request.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ReviewDigestError::config(format!(
                "Failed to read prompt artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        let artifact: Self = serde_json::from_str(&raw).map_err(|e| {
            ReviewDigestError::config(format!(
                "Failed to parse prompt artifact {}: {}",
                path.display(),
                e
            ))
        })?;

        info!(
            "Prompt artifact loaded: {} (version: {}, {} demos)",
            path.display(),
            artifact.version.as_deref().unwrap_or("unversioned"),
            artifact.demos.len()
        );

        Ok(artifact)
    }

    /// Render instructions plus few-shot demos as one system prompt
    pub fn system_prompt(&self, instructions: &str) -> String {
        if self.demos.is_empty() {
            return instructions.to_string();
        }

        let mut prompt = String::from(instructions);
        prompt.push_str("\n\n# Examples");
        for demo in &self.demos {
            prompt.push_str("\n\n## Reviews\n");
            prompt.push_str(&demo.reviews);
            prompt.push_str("\n\n## Summary\n");
            prompt.push_str(&demo.summary);
        }
        prompt
    }
}
