//! Question configuration and the fixed question sets

use crate::config::types::{DefaultValue, QuestionKind};

/// Represents a single question asked during setup
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub kind: QuestionKind,
    /// Environment variable the answer is written to
    pub key: &'static str,
    /// Prompt shown to the user
    pub message: &'static str,
    pub default: Option<DefaultValue>,
}

impl Question {
    pub const fn input(key: &'static str, message: &'static str) -> Self {
        Self { kind: QuestionKind::Input, key, message, default: None }
    }

    pub const fn with_default(mut self, default: DefaultValue) -> Self {
        self.default = Some(default);
        self
    }

    /// Resolves the default at prompt time.
    pub fn default_value(&self) -> Option<String> {
        self.default.as_ref().map(DefaultValue::resolve)
    }
}

/// An ordered group of questions asked and merged together
#[derive(Debug, Clone, Copy)]
pub struct QuestionSet {
    /// Heading printed before the first question
    pub title: &'static str,
    pub questions: &'static [Question],
}

pub const MANDATORY_VARIABLES: QuestionSet = QuestionSet {
    title: "Mandatory variables",
    questions: &[
        Question::input("REACT_APP_SHARETRIBE_SDK_CLIENT_ID", "What is your Flex client id?"),
        Question::input(
            "REACT_APP_STRIPE_PUBLISHABLE_KEY",
            "What is your Stripe publishable key?",
        ),
        Question::input("REACT_APP_MAPBOX_ACCESS_TOKEN", "What is your Mapbox access token?"),
    ],
};

pub const DEFAULT_VARIABLES: QuestionSet = QuestionSet {
    title: "Default variables",
    questions: &[
        Question::input(
            "REACT_APP_SHARETRIBE_MARKETPLACE_CURRENCY",
            "What is your marketplace currency?",
        )
        .with_default(DefaultValue::Constant("USD")),
        Question::input("REACT_APP_CANONICAL_ROOT_URL", "Canonical root url if used e.g. for SEO")
            .with_default(DefaultValue::Constant("http://localhost:3000")),
        Question::input("REACT_APP_AVAILABILITY_ENABLED", "Enable availability")
            .with_default(DefaultValue::Constant("true")),
        Question::input("REACT_APP_DEFAULT_SEARCHES_ENABLED", "Enable default searches")
            .with_default(DefaultValue::Constant("true")),
    ],
};

/// Stages run on first setup, in order
pub const SETUP_STAGES: [QuestionSet; 2] = [MANDATORY_VARIABLES, DEFAULT_VARIABLES];
