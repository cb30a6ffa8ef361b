//! Common test utilities for taskpad integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't touch
//! the user's real data directory.

#![allow(dead_code)]

use assert_cmd::Command;
pub use tempfile::TempDir;

/// A test environment with isolated data storage.
///
/// The `tp()` method returns a `Command` that sets `TP_DATA_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub data_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an isolated data directory.
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a new test environment and initialize the store.
    pub fn init() -> Self {
        let env = Self::new();
        env.tp().arg("init").assert().success();
        env
    }

    /// Get a Command for the tp binary with an isolated data directory.
    pub fn tp(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tp"));
        cmd.env("TP_DATA_DIR", self.data_dir.path());
        // Keep the user's config out of test runs
        cmd.env("XDG_CONFIG_HOME", self.data_dir.path());
        cmd
    }

    /// Get the path to the data directory.
    pub fn data_path(&self) -> &std::path::Path {
        self.data_dir.path()
    }

    /// Add a todo and return its id, parsed from the JSON output.
    pub fn add_todo(&self, title: &str) -> String {
        let output = self.tp().args(["add", title]).output().unwrap();
        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        json["id"].as_str().unwrap().to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
