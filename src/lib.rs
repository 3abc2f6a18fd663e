/// Handles argument parsing and the setup lifecycle.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Question definitions for the setup stages.
pub mod config;

/// Fixed paths, exit codes and verbosity levels.
pub mod constants;

/// User input and interaction handling.
pub mod prompt;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Line-based merge of answers into an env-file.
pub mod merge;

pub mod types;
