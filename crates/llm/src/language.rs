use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported output languages for review summarization
///
/// The closed set is enforced at deserialization time, so an unknown code is
/// rejected before the pipeline ever runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportedLanguage {
    /// Czech
    #[serde(rename = "cs")]
    Czech,

    /// Slovak
    #[serde(rename = "sk")]
    Slovak,
}

impl SupportedLanguage {
    /// ISO 639-1 language code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Czech => "cs",
            Self::Slovak => "sk",
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(SupportedLanguage::Czech.code(), "cs");
        assert_eq!(SupportedLanguage::Slovak.code(), "sk");
    }

    #[test]
    fn test_deserialize_known_codes() {
        let cs: SupportedLanguage = serde_json::from_str("\"cs\"").unwrap();
        assert_eq!(cs, SupportedLanguage::Czech);
        let sk: SupportedLanguage = serde_json::from_str("\"sk\"").unwrap();
        assert_eq!(sk, SupportedLanguage::Slovak);
    }

    #[test]
    fn test_deserialize_rejects_unknown_code() {
        let result: std::result::Result<SupportedLanguage, _> = serde_json::from_str("\"xx\"");
        assert!(result.is_err());
    }
}
