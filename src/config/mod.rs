//! Question definitions for the setup stages
//!
//! This module contains the configuration system components:
//! - `types`: Question kinds and default-value providers
//! - `question`: The question type and the fixed question sets

pub mod question;
pub mod types;

pub use question::{
    Question, QuestionSet, DEFAULT_VARIABLES, MANDATORY_VARIABLES, SETUP_STAGES,
};
pub use types::{DefaultValue, QuestionKind};
