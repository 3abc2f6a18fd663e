//! Basic types and enums for configuration

/// Kind of prompt presented for a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Single line of free text
    Input,
}

/// Where a question's fallback value comes from
#[derive(Debug, Clone, Copy)]
pub enum DefaultValue {
    /// Fixed string
    Constant(&'static str),
    /// Computed when the question is asked
    Computed(fn() -> String),
}

impl DefaultValue {
    pub fn resolve(&self) -> String {
        match self {
            DefaultValue::Constant(value) => (*value).to_string(),
            DefaultValue::Computed(provider) => provider(),
        }
    }
}
