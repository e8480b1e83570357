//! Runs the compiled `hueshift` binary in isolation.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Captured result of one CLI invocation
pub struct TestOutput {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl TestOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Stdout with the trailing newline removed
    pub fn line(&self) -> &str {
        self.stdout.trim_end()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }
}

/// CLI harness with its own scratch directory for config files.
///
/// `HUESHIFT_CONFIG` and `RUST_LOG` are cleared for every run so the host
/// environment cannot leak in.
pub struct TestCli {
    dir: TempDir,
    env: Vec<(String, String)>,
}

impl TestCli {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
            env: Vec::new(),
        }
    }

    pub fn binary() -> PathBuf {
        PathBuf::from(env!("CARGO_BIN_EXE_hueshift"))
    }

    /// Write a config file into the scratch directory and return its path
    pub fn write_config(&self, name: &str, yaml: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_env(mut self, key: &str, value: impl Into<String>) -> Self {
        self.env.push((key.to_string(), value.into()));
        self
    }

    pub fn run(&self, args: &[&str]) -> TestOutput {
        self.run_with_stdin(args, "")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> TestOutput {
        let mut command = Command::new(Self::binary());
        command
            .args(args)
            .env_remove("HUESHIFT_CONFIG")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in &self.env {
            command.env(key, value);
        }

        let mut child = command.spawn().expect("Failed to spawn hueshift");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write stdin");
        let output = child.wait_with_output().expect("Failed to wait for hueshift");

        TestOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
