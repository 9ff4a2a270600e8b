//! Boundary to the chat model that answers finance questions.
//!
//! The model itself lives outside this crate; callers plug one in through
//! [`ChatModel`]. Failures come back as [`AdvisorError`], never as reply text.

use thiserror::Error;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are FinBuddy, an AI assistant that helps users learn about personal finance, budgeting, saving, and investing. Your responses should be friendly, informative, and geared toward financial education for beginners.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("No API key configured. Set OPENAI_API_KEY to use AI features.")]
    MissingCredential,

    #[error("Chat request failed: {0}")]
    Request(String),
}

pub trait ChatModel {
    fn complete(
        &self,
        api_key: &str,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, AdvisorError>;
}

/// Ask the model a question. A blank or absent key fails before the model is called.
pub fn ask(
    model: &dyn ChatModel,
    api_key: Option<&str>,
    prompt: &str,
    system_prompt: Option<&str>,
) -> Result<String, AdvisorError> {
    let key = api_key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(AdvisorError::MissingCredential)?;

    let system = system_prompt.unwrap_or(DEFAULT_SYSTEM_PROMPT);
    tracing::debug!(prompt_len = prompt.len(), "sending chat prompt");
    model.complete(key, system, prompt)
}
