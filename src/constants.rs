//! Constants used throughout envsetup

/// Env-file written by the tool, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Seed file copied to create the env-file
pub const DEFAULT_TEMPLATE_FILE: &str = ".env-template";

/// Separator between a key and its value in an env-file line
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Command that runs this tool, suggested when the env-file is missing
pub const CONFIG_COMMAND: &str = "yarn run config";

/// Command that starts the application once configured
pub const START_COMMAND: &str = "yarn run dev";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
