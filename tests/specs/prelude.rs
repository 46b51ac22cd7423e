//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Config where nobody declares an emergency and weather never changes
/// during a short run
pub const CALM_CONFIG: &str = r#"
occupy = "10ms"
launch_stagger = "1ms"

[helicopters]
count = 2
emergency = "never"

[airplanes]
count = 2
emergency = "never"

[weather]
min_interval = "1h"
max_interval = "1h"
initially_good = true
seed = 7

[monitor]
interval = "1h"
"#;

/// A single emergency helicopter stuck behind bad weather
pub const STRANDED_EMERGENCY_CONFIG: &str = r#"
occupy = "10ms"

[helicopters]
count = 1
emergency = "always"

[airplanes]
count = 0

[weather]
min_interval = "1h"
max_interval = "1h"
initially_good = false

[monitor]
interval = "50ms"
"#;

/// Scratch directory holding config files for one spec
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn runway(&self) -> Cli {
        let mut cmd = Command::cargo_bin("runway").unwrap();
        cmd.current_dir(self.path());
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn passes(mut self) -> Output {
        let output = self.cmd.assert().success().get_output().clone();
        Output::from(output)
    }

    pub fn fails(mut self) -> Output {
        let output = self.cmd.assert().failure().get_output().clone();
        Output::from(output)
    }
}

pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Output {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Output {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {needle:?}:\n{}",
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {needle:?}:\n{}",
            self.stderr
        );
        self
    }

    /// Last non-empty stdout line parsed as JSON
    pub fn last_json(&self) -> serde_json::Value {
        let line = self
            .stdout
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .expect("no stdout");
        serde_json::from_str(line).unwrap()
    }
}
