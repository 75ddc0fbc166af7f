//! Administrator batch specs: handle and archive

use crate::prelude::*;

#[test]
fn migration_lifecycle_through_the_cli() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project");
    ws.tapeq().arg("migrate").arg(&data).passes();

    ws.tapeq()
        .arg("handle")
        .arg(ws.path())
        .arg("--submit")
        .passes()
        .stdout_has("submitted request 1 as external id")
        .stderr_has("assigned external id");
    let submitted = ws.request_file("submitted");
    let content: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&submitted).unwrap()).unwrap();
    assert!(content["external_id"].is_string());

    ws.tapeq()
        .arg("handle")
        .arg(ws.path())
        .arg("--monitor")
        .stdin("Y\n")
        .passes()
        .stderr_has("succeed?")
        .stdout_has("request 1 completed");
    let done = ws.request_file("done");

    ws.tapeq()
        .args(&["archive", "0"])
        .arg(ws.path())
        .passes()
        .stdout_has("Archived <migration request:");
    assert!(!done.exists());
    assert!(ws.control().join("done/archive/1").join(done.file_name().unwrap()).is_file());

    ws.tapeq().arg("list").arg(ws.path()).passes().stdout_lacks("<migration");
    ws.tapeq()
        .arg("list")
        .arg(ws.path())
        .arg("--archived")
        .passes()
        .stdout_has("status=DONE (archived)>")
        .stdout_has("message: operator confirmed completion");
}

#[test]
fn unanswered_check_leaves_request_submitted() {
    let ws = Workspace::new();
    ws.init();
    ws.tapeq().arg("migrate").arg(ws.data_dir("project")).passes();
    ws.tapeq().arg("handle").arg(ws.path()).passes();

    ws.tapeq().arg("handle").arg(ws.path()).arg("-M").stdin("\n").passes();

    assert!(ws.request_file("submitted").is_file());
}

#[test]
fn operator_reported_failure_moves_to_failed() {
    let ws = Workspace::new();
    ws.init();
    ws.tapeq().arg("migrate").arg(ws.data_dir("project")).passes();
    ws.tapeq().arg("handle").arg(ws.path()).passes();

    ws.tapeq()
        .arg("handle")
        .arg(ws.path())
        .stdin("N\n")
        .passes()
        .stdout_has("request 1 failed: operator reported failure");

    assert!(ws.request_file("failed").is_file());
}

#[test]
fn kind_selector_skips_other_kinds() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project");
    ws.tapeq().arg("migrate").arg(&data).passes();
    ws.tapeq().arg("delete").arg(&data).passes();

    ws.tapeq().arg("handle").arg(ws.path()).arg("-d").passes();

    ws.tapeq()
        .arg("list")
        .arg(ws.path())
        .passes()
        .stdout_has("id=1 date=")
        .stdout_has("<migration request:")
        .stdout_has("status=NEW>")
        .stdout_has("<deletion request:")
        .stdout_has("status=SUBMITTED>");
}

#[test]
fn corrupt_request_is_reported_and_batch_exits_two() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project");
    ws.tapeq().arg("migrate").arg(&data).passes();
    ws.tapeq().arg("migrate").arg(&data).passes();
    let first = ws.control().join("new").join(
        std::fs::read_dir(ws.control().join("new"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .find(|n| n.to_string_lossy().contains("-1-"))
            .unwrap(),
    );
    std::fs::write(&first, "not json").unwrap();

    ws.tapeq()
        .arg("handle")
        .arg(ws.path())
        .code(2)
        .stdout_has("submit of request 1: failed with:")
        .stdout_has("submitted request 2 as external id");

    assert!(first.is_file());
    assert!(ws.request_file("submitted").is_file());
}

#[test]
fn fail_fast_stops_the_batch() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project");
    ws.tapeq().arg("migrate").arg(&data).passes();
    ws.tapeq().arg("migrate").arg(&data).passes();
    for entry in std::fs::read_dir(ws.control().join("new")).unwrap() {
        std::fs::write(entry.unwrap().path(), "not json").unwrap();
    }

    ws.tapeq()
        .arg("handle")
        .arg(ws.path())
        .arg("--fail-fast")
        .fails()
        .stdout_has("submit of request 1: failed with:")
        .stdout_lacks("request 2");
}

#[test]
fn non_administrator_workspace_is_skipped() {
    let ws = Workspace::new();

    ws.tapeq()
        .arg("handle")
        .arg(ws.path())
        .passes()
        .stdout_has("Skipping group workspace");
    ws.tapeq()
        .args(&["archive", "30"])
        .arg(ws.path())
        .passes()
        .stdout_has("Skipping group workspace");
}

#[test]
fn archive_keeps_recent_requests() {
    let ws = Workspace::new();
    ws.init();
    ws.tapeq().arg("migrate").arg(ws.data_dir("project")).passes();
    ws.tapeq().arg("withdraw").arg(ws.path()).arg("1").passes();

    ws.tapeq().args(&["archive", "30"]).arg(ws.path()).passes().stdout_lacks("Archived");

    assert!(ws.request_file("withdrawn").is_file());
}
