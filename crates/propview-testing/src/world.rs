//! TestWorld pattern for CLI integration tests.
//!
//! Provides:
//! - An isolated temp directory with its own config file
//! - Sample records copied in on demand
//! - Execution of the `propview` binary with `PROPVIEW_CONFIG` pointed at it

use anyhow::Result;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::fixtures::SampleRecords;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use propview_testing::{SampleRecords, TestWorld};
///
/// let world = TestWorld::new().with_sample(SampleRecords::PG_BOYS);
/// let result = world.run(&["show", "pg_boys.json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    samples: SampleRecords,
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
        let config_path = temp_dir.path().join("propview").join("config.toml");

        Self {
            temp_dir,
            config_path,
            samples: SampleRecords::new(),
        }
    }

    /// Write `contents` as the config file the binary will load.
    pub fn with_config(self, contents: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Copy a sample record into the temp dir (same file name).
    pub fn with_sample(self, sample_name: &str) -> Self {
        self.samples
            .copy_to(sample_name, self.temp_dir.path())
            .expect("Failed to copy sample");
        self
    }

    /// Write an ad-hoc record file into the temp dir.
    pub fn with_record(self, file_name: &str, json: &serde_json::Value) -> Self {
        std::fs::write(self.temp_dir.path().join(file_name), json.to_string())
            .expect("Failed to write record");
        self
    }

    /// Point a command at this environment's cwd and config.
    fn configure_command(&self, cmd: &mut Command) {
        cmd.current_dir(self.temp_dir.path())
            .env("PROPVIEW_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");
    }

    /// Run `propview` with `args` inside this environment.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("propview")
            .map_err(|e| anyhow::anyhow!("Failed to find propview binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Output of one CLI invocation
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
