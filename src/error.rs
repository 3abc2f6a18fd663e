use thiserror::Error;

use crate::cli::messages;
use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Cannot proceed: template file '{template_path}' does not exist.")]
    TemplateNotFound { template_path: String },

    /// Prompting failed because no more input is available (EOF or no terminal).
    #[error("Input stream closed: {0}.")]
    InputClosed(String),

    #[error("Failed to read '{path}'. Original error: {e}")]
    ReadError { path: String, e: std::io::Error },

    #[error("Failed to write '{path}'. Original error: {e}")]
    WriteError { path: String, e: std::io::Error },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::InputClosed(err.to_string())
    }
}

/// Convenience type alias for Results with this crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", messages::failure(&err));
    std::process::exit(exit_codes::FAILURE);
}
