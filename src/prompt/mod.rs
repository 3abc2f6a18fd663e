//! User prompting for the setup stages
//!
//! The module is structured in layers:
//! - `interface`: Abstract prompt interface independent of any UI library
//! - `dialoguer`: Terminal implementation using the dialoguer library
//! - `reader`: Line-based implementation over any reader (piped stdin, tests)

use std::io::IsTerminal;

pub mod dialoguer;
pub mod interface;
pub mod reader;

pub use interface::*;

use self::dialoguer::DialoguerPrompter;
use self::reader::ReaderPrompter;

/// Picks the prompt provider for the current process.
///
/// A terminal gets interactive dialoguer prompts; otherwise answers are read
/// line by line from stdin, and running out of lines aborts the run.
pub fn get_prompt_provider() -> Box<dyn TextPrompter> {
    if std::io::stdin().is_terminal() {
        log::debug!("stdin is a terminal, using interactive prompts");
        Box::new(DialoguerPrompter::new())
    } else {
        log::debug!("stdin is not a terminal, reading answers line by line");
        Box::new(ReaderPrompter::new(std::io::stdin().lock()))
    }
}
