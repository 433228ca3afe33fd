//! TestWorld pattern for CLI integration tests.
//!
//! Every world owns a temp directory that doubles as the working directory
//! and the artifact output directory, plus an empty config file so the
//! developer's own configuration never leaks into a test.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use scrapediag_types::ArtifactKind;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use scrapediag_testing::{TestWorld, fixtures};
///
/// let server = fixtures::start_healthy_service().unwrap();
/// let world = TestWorld::new().with_base_url(server.base_url());
///
/// let result = world.run(&["collect"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    out_dir: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
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
        let base_path = temp_dir.path().to_path_buf();
        let config_path = base_path.join("scrapediag.toml");
        std::fs::write(&config_path, "").expect("Failed to write empty config");

        let mut env_vars = HashMap::new();
        env_vars.insert("SCRAPEDIAG_TIMEOUT".to_string(), "5".to_string());
        env_vars.insert("NO_COLOR".to_string(), "1".to_string());

        Self {
            cwd: base_path.clone(),
            out_dir: base_path,
            temp_dir,
            config_path,
            env_vars,
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Where the binary writes artifacts unless a test passes `--out-dir`.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn artifact_path(&self, kind: ArtifactKind) -> PathBuf {
        self.out_dir.join(kind.file_name())
    }

    pub fn read_artifact(&self, kind: ArtifactKind) -> Result<String> {
        Ok(std::fs::read_to_string(self.artifact_path(kind))?)
    }

    /// Point the binary at a service through the environment, so a test
    /// can still override it with `--base-url`.
    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        self.with_env("SCRAPEDIAG_BASE_URL", url)
    }

    /// Write artifacts into a subdirectory of the temp root.
    pub fn with_out_subdir(mut self, name: &str) -> Self {
        self.out_dir = self.temp_dir.path().join(name);
        let out = self.out_dir.display().to_string();
        self.with_env("SCRAPEDIAG_OUT_DIR", out)
    }

    /// Replace the empty config file with `contents`.
    pub fn with_config(self, contents: &str) -> Self {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a file relative to the temp root.
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(&self.cwd);

        for key in [
            "SCRAPEDIAG_BASE_URL",
            "SCRAPEDIAG_OUT_DIR",
            "SCRAPEDIAG_TIMEOUT",
            "RUST_LOG",
        ] {
            cmd.env_remove(key);
        }
        cmd.env("SCRAPEDIAG_CONFIG", &self.config_path);

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `scrapediag` binary with `args` and capture its output.
    ///
    /// # Note
    /// Relies on `Command::cargo_bin()`, so it only works from the test
    /// targets of the package that builds the binary.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("scrapediag")
            .map_err(|e| anyhow::anyhow!("Failed to find scrapediag binary: {}", e))?;

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

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
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
