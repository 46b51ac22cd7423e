//! Config command specs

use crate::prelude::*;

#[test]
fn config_prints_defaults() {
    Project::empty()
        .runway()
        .args(&["config"])
        .passes()
        .stdout_has("occupy = \"2s\"")
        .stdout_has("[helicopters]")
        .stdout_has("count = 8")
        .stdout_has("emergency = \"odd_positions\"");
}

#[test]
fn config_reflects_file_overrides() {
    let project = Project::empty();
    project.file("runway.toml", "[airplanes]\ncount = 3\nemergency = \"never\"\n");

    project
        .runway()
        .args(&["--config", "runway.toml", "config"])
        .passes()
        .stdout_has("count = 3")
        .stdout_has("emergency = \"never\"");
}

#[test]
fn invalid_config_fails_with_reason() {
    let project = Project::empty();
    project.file(
        "runway.toml",
        "[weather]\nmin_interval = \"9s\"\nmax_interval = \"1s\"\n",
    );

    project
        .runway()
        .args(&["--config", "runway.toml", "config"])
        .fails()
        .stderr_has("min_interval");
}

#[test]
fn missing_config_file_fails() {
    Project::empty()
        .runway()
        .args(&["--config", "nope.toml", "run"])
        .fails()
        .stderr_has("nope.toml");
}
