//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    Project::empty()
        .runway()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("config");
}

#[test]
fn run_help_lists_fleet_overrides() {
    Project::empty()
        .runway()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--helicopters")
        .stdout_has("--airplanes")
        .stdout_has("--occupy");
}

#[test]
fn unknown_subcommand_fails() {
    Project::empty()
        .runway()
        .args(&["takeoff"])
        .fails()
        .stderr_has("unrecognized subcommand");
}
