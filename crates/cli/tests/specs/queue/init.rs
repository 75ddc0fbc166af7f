//! Workspace initialisation specs

use crate::prelude::*;

#[test]
fn init_with_yes_creates_control_tree() {
    let ws = Workspace::new();

    ws.tapeq()
        .arg("init")
        .arg(ws.path())
        .arg("--yes")
        .passes()
        .stdout_has("created control files/directories under");

    for status in ["new", "submitting", "submitted", "done", "failed", "withdrawn"] {
        assert!(ws.control().join(status).is_dir(), "{status} missing");
    }
    assert_eq!(std::fs::read_to_string(ws.control().join(".last_id")).unwrap(), "0\n");
}

#[test]
fn init_asks_for_confirmation_without_control_dir() {
    let ws = Workspace::new();

    ws.tapeq()
        .arg("init")
        .arg(ws.path())
        .stdin("n\n")
        .fails()
        .stdout_has("type 'Y' to confirm")
        .stderr_has("administrator not confirmed");
    assert!(!ws.control().exists());

    ws.tapeq().arg("init").arg(ws.path()).stdin("Y\n").passes();
    assert!(ws.control().join("new").is_dir());
}

#[test]
fn init_is_repeatable_by_the_owner() {
    let ws = Workspace::new();
    ws.init();
    ws.tapeq().arg("init").arg(ws.path()).passes().stdout_lacks("confirm");
}

#[test]
fn init_accepts_paths_inside_the_workspace() {
    let ws = Workspace::new();
    ws.tapeq().arg("init").arg(ws.path().join("some/deep/dir")).arg("--yes").passes();
    assert!(ws.control().join("done").is_dir());
}

#[test]
fn init_outside_workspace_fails() {
    cli()
        .args(&["init", "/not/a/workspace", "--yes"])
        .fails()
        .stderr_has("Failed with the following error:")
        .stderr_has("not in a recognized group workspace");
}
