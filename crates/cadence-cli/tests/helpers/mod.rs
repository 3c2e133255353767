use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Fixed "today" every harness command runs with.
pub const TODAY: &str = "20240115";

/// Test harness for running CLI commands with temporary databases
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary database
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// A command pointed at this harness's database, run from the temp dir so
    /// no stray `cadence.toml` is picked up
    pub fn command(&self) -> Command {
        self.command_on(TODAY)
    }

    /// Like [`command`](Self::command) with a different "today"
    pub fn command_on(&self, today: &str) -> Command {
        let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
        cmd.current_dir(self.temp_dir.path());
        cmd.env("CADENCE_DATABASE_PATH", &self.db_path);
        cmd.env_remove("RUST_LOG");
        cmd.args(["--today", today]);
        cmd
    }

    pub fn temp_dir(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Runs `list --json` with extra args and parses the output
    pub fn list_json(&self, extra: &[&str]) -> Vec<Value> {
        let mut args = vec!["list", "--json"];
        args.extend_from_slice(extra);
        let output = self.run_success(&args).get_output().stdout.clone();
        let value: Value = serde_json::from_slice(&output).expect("list --json should print JSON");
        value.as_array().cloned().expect("list --json should print an array")
    }

    /// Runs `show <id> --json` and parses the output
    pub fn show_json(&self, id: i64) -> Value {
        let id = id.to_string();
        let output = self.run_success(&["show", &id, "--json"]).get_output().stdout.clone();
        serde_json::from_slice(&output).expect("show --json should print JSON")
    }

    /// Adds a task and returns its stored JSON form
    pub fn add(&self, args: &[&str]) -> Value {
        let before: Vec<i64> = self.list_json(&[]).iter().filter_map(|t| t["id"].as_i64()).collect();
        let mut full = vec!["add"];
        full.extend_from_slice(args);
        self.run_success(&full);
        self.list_json(&[])
            .into_iter()
            .find(|t| t["id"].as_i64().is_some_and(|id| !before.contains(&id)))
            .expect("added task should be listed")
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    pub fn has_task_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Date"))
            .and(predicate::str::contains("Title"))
            .and(predicate::str::contains("Repeat"))
    }

    pub fn task_created_successfully() -> impl Predicate<str> {
        predicate::str::contains("✓").and(predicate::str::contains("Added task"))
    }

    pub fn task_completed_successfully() -> impl Predicate<str> {
        predicate::str::contains("Completed task")
    }

    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error:").or(predicate::str::contains("error:"))
    }
}
