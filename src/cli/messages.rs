//! User-facing console messages.
//!
//! Styling is cosmetic; `console` drops it when the output is not a terminal.

use crate::constants::{CONFIG_COMMAND, START_COMMAND};
use console::style;
use std::fmt::Display;
use std::path::Path;

pub fn intro(env_file: &Path) -> String {
    format!(
        "\nYou don't have {} file yet. With this tool you can configure required \
         environment variables and create {} file automatically.\n",
        env_file.display(),
        env_file.display()
    )
}

pub fn stage_heading(title: &str) -> String {
    style(title).bold().to_string()
}

pub fn created(env_file: &Path) -> String {
    format!(
        "\n{} file was created successfully!\n\n\
         Note that the {} file is a hidden file so it might not be visible directly in \
         directory listing. If you want to update the environment variables you need to \
         edit the file. Remember to restart the application after editing the environment \
         variables!\n\n\
         Start the application by running {}\n",
        env_file.display(),
        env_file.display(),
        style(START_COMMAND).cyan()
    )
}

pub fn already_exists(env_file: &Path) -> String {
    format!(
        "{} file already exists. You can edit the variables directly in that file. \
         Remember to restart the application after editing the environment variables!",
        env_file.display()
    )
}

pub fn missing_env_file() -> String {
    format!(
        "Required environment variables are missing. These need to be set before \
         starting the app. You can create the .env file and set the variables by \
         running {}",
        style(CONFIG_COMMAND).cyan()
    )
}

pub fn failure(err: &impl Display) -> String {
    style(format!("An error occurred due to: {err}")).red().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_file_points_to_config_command() {
        assert!(missing_env_file().contains(CONFIG_COMMAND));
    }

    #[test]
    fn created_points_to_start_command() {
        let message = created(Path::new(".env"));
        assert!(message.contains(".env file was created successfully!"));
        assert!(message.contains(START_COMMAND));
    }

    #[test]
    fn failure_wraps_error_message() {
        assert!(failure(&"disk full").contains("An error occurred due to: disk full"));
    }
}
