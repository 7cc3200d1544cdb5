//! Prompt templates for the summarization stages

use crate::language::SupportedLanguage;

/// Stage-1 instructions for the factual-stylized policy
///
/// The persuasive instructions live in the prompt artifact; the neutral draft
/// instructions are fixed because the artifact is optimized for the final
/// persuasive output, not the intermediate draft.
pub const FACTUAL_INSTRUCTIONS: &str = r#"You are a careful review analyst. Summarize the provided user reviews.

Instructions:
- State only what the reviews actually say. No interpretation, no opinion.
- Cover both positive and negative points with their rough frequency.
- Keep the summary compact and neutral in tone."#;

/// User prompt for the summarize stage
pub fn summarize_user_prompt(reviews_md: &str, language: SupportedLanguage) -> String {
    format!(
        "{}\n\nWrite the summary in the language with ISO 639-1 code '{}'.",
        reviews_md,
        language.code()
    )
}

/// User prompt for the stylize stage
///
/// The draft is passed through verbatim; no reformatting between stages.
pub fn stylize_user_prompt(draft: &str, language: SupportedLanguage) -> String {
    format!(
        "{}\n\nWrite the restyled summary in the language with ISO 639-1 code '{}'.",
        draft,
        language.code()
    )
}
