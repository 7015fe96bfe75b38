//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers isolated from the caller's environment
//! - Fixtures for multi-project directory layouts

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak configuration into a test run.
const ROOTDIR_VARS: &[&str] = &[
    "ROOTDIR_CONFIG_DIR",
    "ROOTDIR_LOG_MODE",
    "ROOTDIR_PROJECT_DIRECTORIES",
    "ROOTDIR_FOLLOW_SYMBOLIC_LINKS",
    "ROOTDIR_SKIP",
    "ROOTDIR_OUTPUT_PROPERTY",
    "ROOTDIR_OUTPUT_FORMAT",
];

/// Test environment with an isolated user configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub temp_path: PathBuf,
    /// User configuration directory passed via --config-dir
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The temporary path is canonicalized so that it can be compared with
    /// resolved output on platforms where the temp directory is a link.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let config_dir = temp_path.join("user-config");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a command builder without --config-dir.
    ///
    /// `ROOTDIR_*` variables are cleared and the working directory is the
    /// temporary directory.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("rootdir").expect("Failed to find rootdir binary");
        for var in ROOTDIR_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the user config directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file relative to the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.config_dir).expect("Failed to create config dir");
        std::fs::write(self.config_dir.join("config.yaml"), contents)
            .expect("Failed to write user config");
    }

    /// Create the standard `repo/moduleA`, `repo/moduleB/sub` layout and
    /// return the `repo` path.
    pub fn create_repo(&self) -> PathBuf {
        let repo = self.create_dir("repo");
        self.create_dir("repo/moduleA");
        self.create_dir("repo/moduleB/sub");
        repo
    }

    /// Run `rootdir resolve` with the given arguments and return trimmed stdout.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn resolve<I, S>(&self, args: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let output = self
            .command()
            .arg("resolve")
            .args(args)
            .output()
            .expect("Failed to run resolve command");

        assert!(
            output.status.success(),
            "Resolve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
