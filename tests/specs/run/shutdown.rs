//! Runs stopped by the status monitor

use crate::prelude::*;

#[test]
fn monitor_shuts_down_when_only_emergencies_wait() {
    let project = Project::empty();
    project.file("stranded.toml", STRANDED_EMERGENCY_CONFIG);

    project
        .runway()
        .args(&["--config", "stranded.toml", "run"])
        .passes()
        .stdout_has("=== RUNWAY STATUS #1 ===")
        .stdout_has("Emergency active: yes")
        .stdout_has("Weather: bad")
        .stdout_has("No aircraft waiting. Shutting down.")
        .stdout_has("Stopped: no aircraft waiting")
        .stdout_has("Never admitted: 1");
}

#[test]
fn status_reports_stream_as_json() {
    let project = Project::empty();
    project.file("stranded.toml", STRANDED_EMERGENCY_CONFIG);

    let output = project
        .runway()
        .args(&["--config", "stranded.toml", "run", "--format", "json"])
        .passes();

    let first_line = output.stdout.lines().next().unwrap();
    let first: serde_json::Value = serde_json::from_str(first_line).unwrap();
    assert_eq!(first["verdict"], "shutdown");
    assert_eq!(first["state"]["helicopters_waiting"], 0);

    assert_eq!(output.last_json()["stop"], "monitor_shutdown");
}
