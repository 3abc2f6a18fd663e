#![allow(dead_code)]

use envsetup::cli::Args;
use envsetup::error::Result;
use envsetup::prompt::{TextPromptConfig, TextPrompter};
use std::cell::Cell;
use std::path::PathBuf;
use tempfile::TempDir;

/// Template shipped with the application, every recognized key present.
pub const FULL_TEMPLATE: &str = "\
# Flex SDK client id
REACT_APP_SHARETRIBE_SDK_CLIENT_ID=
REACT_APP_STRIPE_PUBLISHABLE_KEY=
REACT_APP_MAPBOX_ACCESS_TOKEN=

# Defaults
REACT_APP_SHARETRIBE_MARKETPLACE_CURRENCY=USD
REACT_APP_CANONICAL_ROOT_URL=http://localhost:3000
REACT_APP_AVAILABILITY_ENABLED=true
REACT_APP_DEFAULT_SEARCHES_ENABLED=true
NODE_ENV=development
";

/// Scratch directory holding a template and the env-file location.
pub struct Workspace {
    pub dir: TempDir,
    pub template: PathBuf,
    pub env_file: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join(".env-template");
        let env_file = dir.path().join(".env");
        Self { dir, template, env_file }
    }

    pub fn with_template(content: impl AsRef<[u8]>) -> Self {
        let ws = Self::new();
        std::fs::write(&ws.template, content).unwrap();
        ws
    }

    pub fn args(&self, check: bool) -> Args {
        Args {
            check,
            env_file: self.env_file.clone(),
            template: self.template.clone(),
            verbose: 2,
        }
    }

    pub fn read_env_file(&self) -> String {
        std::fs::read_to_string(&self.env_file).unwrap()
    }

    pub fn read_env_bytes(&self) -> Vec<u8> {
        std::fs::read(&self.env_file).unwrap()
    }
}

/// Prompter that records how often it was asked and never answers.
#[derive(Default)]
pub struct CountingPrompter {
    pub calls: Cell<usize>,
}

impl TextPrompter for CountingPrompter {
    fn prompt_text(&self, _config: &TextPromptConfig) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok("unexpected".to_string())
    }
}
