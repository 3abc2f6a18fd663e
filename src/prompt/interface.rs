//! Pure interfaces for prompting without external dependencies
//!
//! This module defines the abstract interface used by the prompt stage.
//! It is independent of any specific UI library implementation.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    /// Returned when the user submits an empty line
    pub default: Option<String>,
}

/// Abstract interface for text input prompts
///
/// Implementations return the line the user entered, or the default when the
/// line is empty and one is set. An empty line without a default is not an
/// answer; the question is asked again. Running out of input is an
/// [`Error::InputClosed`](crate::error::Error::InputClosed).
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

impl<T: TextPrompter + ?Sized> TextPrompter for Box<T> {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        (**self).prompt_text(config)
    }
}
