mod utils;

use envsetup::cli::{Outcome, Runner};
use envsetup::constants::{exit_codes, CONFIG_COMMAND};
use test_log::test;
use utils::{CountingPrompter, Workspace, FULL_TEMPLATE};

#[test]
fn check_fails_with_guidance_when_env_file_is_missing() {
    let ws = Workspace::with_template(FULL_TEMPLATE);
    let prompter = CountingPrompter::default();
    let mut out = Vec::new();

    let outcome = Runner::new(ws.args(true)).run(&prompter, &mut out).unwrap();

    assert_eq!(outcome, Outcome::CheckFailed);
    assert_eq!(outcome.exit_code(), exit_codes::FAILURE);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Required environment variables are missing"));
    assert!(output.contains(CONFIG_COMMAND));
    assert!(!ws.env_file.exists(), "check mode never creates the env-file");
    assert_eq!(prompter.calls.get(), 0);
}

#[test]
fn check_passes_silently_when_env_file_exists() {
    let ws = Workspace::new();
    std::fs::write(&ws.env_file, "REACT_APP_SHARETRIBE_SDK_CLIENT_ID=abc123\n").unwrap();
    let prompter = CountingPrompter::default();
    let mut out = Vec::new();

    let outcome = Runner::new(ws.args(true)).run(&prompter, &mut out).unwrap();

    assert_eq!(outcome, Outcome::CheckPassed);
    assert_eq!(outcome.exit_code(), exit_codes::SUCCESS);
    assert!(out.is_empty());
    assert_eq!(ws.read_env_file(), "REACT_APP_SHARETRIBE_SDK_CLIENT_ID=abc123\n");
    assert_eq!(prompter.calls.get(), 0);
}

#[test]
fn check_does_not_need_a_template() {
    let ws = Workspace::new();
    let mut out = Vec::new();

    let outcome =
        Runner::new(ws.args(true)).run(&CountingPrompter::default(), &mut out).unwrap();

    assert_eq!(outcome, Outcome::CheckFailed);
    assert!(!ws.template.exists());
}
