//! TestWorld pattern for declarative integration test setup.
//!
//! Provides:
//! - An isolated temp directory per test
//! - Transcript placement
//! - CLI execution with captured output

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::TranscriptBuilder;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use agnote_testing::{TestWorld, TranscriptBuilder};
///
/// let world = TestWorld::new()
///     .with_transcript("session.jsonl", &TranscriptBuilder::new().user("hello there, world"));
///
/// let result = world.run(&["session.jsonl"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the temp directory root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a file inside the world.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write a transcript into the world (builder pattern).
    pub fn with_transcript(self, name: &str, transcript: &TranscriptBuilder) -> Self {
        transcript
            .write_to(&self.path(name))
            .expect("Failed to write transcript");
        self
    }

    /// Write raw file contents into the world (builder pattern).
    pub fn with_file(self, name: &str, contents: &str) -> Self {
        std::fs::write(self.path(name), contents).expect("Failed to write file");
        self
    }

    /// Read a file from the world.
    pub fn read(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.path(name))?)
    }

    /// Execute the agnote binary with the world root as working directory.
    ///
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built, which cargo test does automatically for the CLI crate.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("agnote")
            .map_err(|e| anyhow::anyhow!("Failed to find agnote binary: {}", e))?;

        cmd.current_dir(self.root());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Process exit code, if it exited normally.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
