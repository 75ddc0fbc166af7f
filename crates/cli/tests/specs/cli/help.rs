//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn tapeq_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn tapeq_help_lists_commands() {
    let run = cli().args(&["--help"]).passes();
    for command in ["init", "migrate", "retrieve", "delete", "list", "withdraw", "handle", "archive"] {
        assert!(run.stdout().contains(command), "help lacks {command}");
    }
}

#[test]
fn tapeq_handle_help_shows_selectors() {
    cli()
        .args(&["handle", "--help"])
        .passes()
        .stdout_has("--migrate")
        .stdout_has("--retrieve")
        .stdout_has("--submit")
        .stdout_has("--monitor")
        .stdout_has("--fail-fast");
}

#[test]
fn tapeq_handle_rejects_two_kinds() {
    cli().args(&["handle", "-m", "-r", "/gws/a/b/c"]).fails().stderr_has("cannot be used with");
}

#[test]
fn tapeq_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
