//! Test environment for isolated iconpack runs.
//!
//! Provides `TestEnv` - a temp directory used as the working directory of
//! the binary, plus helpers to seed sources and read generated files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running the iconpack binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
            .collect()
    }
}

/// Isolated workspace. Relative paths resolve against `root`.
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    /// Get path relative to the workspace root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write `optimized/<package>/<file>`
    pub fn add_svg(&self, package: &str, file: &str, markup: &str) -> &Self {
        let dir = self.path("optimized").join(package);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), markup).unwrap();
        self
    }

    /// Write a file relative to the workspace root
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// Read a generated file relative to the workspace root
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("cannot read {relative}: {e}"))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Run iconpack from the workspace root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run iconpack with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        run_in(self.root.path(), args, env_vars)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn run_in(cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_iconpack"));
    cmd.current_dir(cwd)
        .args(args)
        .env("LANG", "en_US.UTF-8")
        .env("TERM", "xterm-256color")
        .env_remove("ICONPACK_OPTIMIZED_DIR")
        .env_remove("ICONPACK_OUTPUT_DIR")
        .env_remove("LC_ALL")
        .env_remove("LC_CTYPE");
    for (key, value) in env_vars {
        cmd.env(key, value);
    }

    let output = cmd.output().unwrap();
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
