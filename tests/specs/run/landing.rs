//! Runs where every aircraft lands

use crate::prelude::*;

#[test]
fn calm_fleet_lands_everyone() {
    let project = Project::empty();
    project.file("calm.toml", CALM_CONFIG);

    project
        .runway()
        .args(&["--config", "calm.toml", "run"])
        .passes()
        .stdout_has("Stopped: all aircraft landed")
        .stdout_has("Launched: 4, used runway: 4, landed: 4")
        .stdout_has("helicopter[0]")
        .stdout_lacks("Never admitted");
}

#[test]
fn command_line_overrides_fleet_size() {
    let project = Project::empty();
    project.file("calm.toml", CALM_CONFIG);

    project
        .runway()
        .args(&["--config", "calm.toml", "run", "--helicopters", "1", "--airplanes", "0"])
        .passes()
        .stdout_has("Launched: 1, used runway: 1, landed: 1");
}

#[test]
fn json_summary_reports_stop_reason() {
    let project = Project::empty();
    project.file("calm.toml", CALM_CONFIG);

    let output = project
        .runway()
        .args(&["--config", "calm.toml", "run", "--format", "json"])
        .passes();

    let summary = output.last_json();
    assert_eq!(summary["stop"], "all_landed");
    assert_eq!(summary["launched"], 4);
    assert_eq!(summary["admissions"][0]["kind"], "helicopter");
    assert_eq!(summary["final_state"]["runway_free"], true);
}
