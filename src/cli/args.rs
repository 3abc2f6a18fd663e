use crate::constants::{verbosity, DEFAULT_ENV_FILE, DEFAULT_TEMPLATE_FILE};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for envsetup.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Only check that the env-file exists; exit with status 1 when it does not.
    #[arg(long)]
    pub check: bool,

    /// Env-file to create and update.
    #[arg(long = "env-file", value_name = "PATH", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Template copied to create the env-file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TEMPLATE_FILE)]
    pub template: PathBuf,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments, exiting with clap's usage error on failure.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
