//! Test environment for running the `registrar` binary in isolation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Result of running a Registrar CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated working directory with its own config home.
///
/// Environment variables that would leak the developer's setup into the run
/// (`REGISTRAR_*`, `RUST_LOG`) are removed from the child process.
pub struct TestEnv {
    pub root: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Default store location for tests
    pub fn data_file(&self) -> PathBuf {
        self.path("ems_data.json")
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_registrar"));
        cmd.current_dir(self.root.path())
            .args(args)
            .stdin(Stdio::null())
            .env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.path(".config"))
            .env_remove("REGISTRAR_DATA_FILE")
            .env_remove("REGISTRAR_LOG")
            .env_remove("RUST_LOG");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// `--data <path>` argument pair
#[allow(dead_code)]
pub fn data_arg(path: &Path) -> [String; 2] {
    ["--data".to_string(), path.display().to_string()]
}
