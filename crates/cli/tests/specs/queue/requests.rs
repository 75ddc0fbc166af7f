//! Request creation, listing and withdrawal specs

use crate::prelude::*;

#[test]
fn migrate_creates_new_request() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project/run1");

    ws.tapeq()
        .arg("migrate")
        .arg(&data)
        .passes()
        .stdout_has("created request")
        .stdout_has("<migration request: user=")
        .stdout_has("id=1 ")
        .stdout_has("status=NEW>")
        .stdout_has(&format!("path to migrate: {}", data.display()));

    let content = std::fs::read_to_string(ws.request_file("new")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["path"], data.display().to_string());
}

#[test]
fn migrate_missing_path_fails() {
    let ws = Workspace::new();
    ws.init();

    ws.tapeq()
        .arg("migrate")
        .arg(ws.path().join("nowhere"))
        .fails()
        .stderr_has("does not exist");
}

#[test]
fn migrate_before_init_fails() {
    let ws = Workspace::new();
    let data = ws.data_dir("project");

    ws.tapeq().arg("migrate").arg(&data).fails().stderr_has("not initialised");
}

#[test]
fn ids_increase_across_kinds() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project");

    ws.tapeq().arg("migrate").arg(&data).passes().stdout_has("id=1 ");
    ws.tapeq().arg("delete").arg(&data).passes().stdout_has("id=2 ");
    ws.tapeq()
        .arg("retrieve")
        .arg(&data)
        .arg(ws.path().join("restored"))
        .passes()
        .stdout_has("id=3 ")
        .stdout_has("<retrieval request:")
        .stdout_has("restore to ");
}

#[test]
fn retrieve_to_original_location_requires_it_to_be_empty() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project");

    ws.tapeq()
        .arg("retrieve")
        .arg(&data)
        .fails()
        .stderr_has("exists and is not an empty directory");

    std::fs::remove_file(data.join("data.nc")).unwrap();
    ws.tapeq()
        .arg("retrieve")
        .arg(&data)
        .passes()
        .stdout_has("restore to original location");
}

#[test]
fn retrieve_to_another_workspace_fails() {
    let ws = Workspace::new();
    ws.init();
    let other = ws.sibling("gws2");

    ws.tapeq()
        .arg("retrieve")
        .arg(ws.path().join("project"))
        .arg(other.join("restored"))
        .fails()
        .stderr_has("different group workspace");
}

#[test]
fn list_shows_own_requests_with_details() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project");
    ws.tapeq().arg("delete").arg(&data).passes();

    ws.tapeq()
        .arg("list")
        .arg(ws.path())
        .passes()
        .stdout_has("<deletion request:")
        .stdout_has(&format!("path to delete offline copy of: {}", data.display()));
}

#[test]
fn list_hides_other_users_unless_asked() {
    let ws = Workspace::new();
    ws.init();
    std::fs::write(
        ws.control().join("new/zed-migration-7-2024-01-02"),
        "{\"path\": \"/elsewhere\"}\n",
    )
    .unwrap();

    ws.tapeq().arg("list").arg(ws.path()).passes().stdout_lacks("user=zed");
    ws.tapeq()
        .arg("list")
        .arg(ws.path())
        .arg("--all-users")
        .passes()
        .stdout_has("<migration request: user=zed id=7 date=2024-01-02 status=NEW>");
}

#[test]
fn list_current_skips_withdrawn() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project");
    ws.tapeq().arg("migrate").arg(&data).passes();
    ws.tapeq().arg("migrate").arg(&data).passes();
    ws.tapeq().arg("withdraw").arg(ws.path()).arg("1").passes();

    ws.tapeq()
        .arg("list")
        .arg(ws.path())
        .arg("--current")
        .passes()
        .stdout_has("id=2 ")
        .stdout_lacks("id=1 ");
}

#[test]
fn list_json_is_machine_readable() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project");
    ws.tapeq().arg("migrate").arg(&data).passes();

    let run = ws.tapeq().arg("list").arg(ws.path()).args(&["--format", "json"]).passes();

    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["kind"], "migration");
    assert_eq!(value[0]["status"], "NEW");
    assert_eq!(value[0]["archived"], false);
    assert_eq!(value[0]["path"], data.display().to_string());
}

#[test]
fn withdraw_moves_request_once() {
    let ws = Workspace::new();
    ws.init();
    let data = ws.data_dir("project");
    ws.tapeq().arg("migrate").arg(&data).passes();

    ws.tapeq().arg("withdraw").arg(ws.path()).arg("1").passes().stdout_has("withdrew request id=1");
    assert!(ws.request_file("withdrawn").is_file());

    ws.tapeq()
        .arg("withdraw")
        .arg(ws.path())
        .arg("1")
        .fails()
        .stderr_has("withdraw only supported for status NEW");
}

#[test]
fn withdraw_unknown_id_fails() {
    let ws = Workspace::new();
    ws.init();

    ws.tapeq()
        .arg("withdraw")
        .arg(ws.path())
        .arg("99")
        .fails()
        .stderr_has("did not find exactly 1 request with id 99");
}
