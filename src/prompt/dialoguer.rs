//! Dialoguer-based implementation of the prompt interface
//!
//! Used when stdin is attached to a terminal.

use super::interface::{TextPromptConfig, TextPrompter};
use crate::error::Result;
use dialoguer::Input;

pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(&config.prompt);

        // Without a default dialoguer re-asks on empty input.
        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }

        Ok(input.interact_text()?)
    }
}
