use envsetup::{
    cli::{get_args, get_log_level_from_verbose, run},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new().filter_level(get_log_level_from_verbose(args.verbose)).init();

    match run(args) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(err) => default_error_handler(err),
    }
}
