use crate::{
    config::{Question, QuestionKind},
    error::Result,
    prompt::{TextPromptConfig, TextPrompter},
    types::AnswerSet,
};

/// Runs one prompt stage: asks every question in order and collects the answers
pub struct AnswerCollector<'a, P: TextPrompter + ?Sized> {
    prompter: &'a P,
}

impl<'a, P: TextPrompter + ?Sized> AnswerCollector<'a, P> {
    pub fn new(prompter: &'a P) -> Self {
        Self { prompter }
    }

    /// Asks each question once, in order; the first failure aborts the stage.
    pub fn collect_answers(&self, questions: &[Question]) -> Result<AnswerSet> {
        questions
            .iter()
            .map(|question| -> Result<(&str, String)> {
                let answer = self.ask(question)?;
                log::debug!("Collected answer for {}", question.key);
                Ok((question.key, answer))
            })
            .collect()
    }

    fn ask(&self, question: &Question) -> Result<String> {
        match question.kind {
            QuestionKind::Input => {
                let default = question.default_value();
                let config = TextPromptConfig {
                    prompt: question.message.to_string(),
                    default: default.clone(),
                };
                let input = self.prompter.prompt_text(&config)?;

                Ok(match default {
                    Some(default) if input.is_empty() => default,
                    _ => input,
                })
            }
        }
    }
}
