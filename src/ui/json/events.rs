//! Typed JSON events for NDJSON output.
//!
//! Every line carries `event` and `command` so a stream can be filtered
//! without knowing the event shape.

use serde::Serialize;

use crate::models::{Format, Package};

/// Command name stamped on every event.
pub const COMMAND: &str = "build";

/// Event emitted when a package build starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub version: &'static str,
    pub package: Package,
    pub input: String,
    pub output: String,
    pub asset_count: usize,
}

impl StartEvent {
    pub fn new(package: Package, input: String, output: String, asset_count: usize) -> Self {
        Self {
            event: "start",
            command: COMMAND,
            version: env!("CARGO_PKG_VERSION"),
            package,
            input,
            output,
            asset_count,
        }
    }
}

/// Non-fatal problem.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub message: String,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command: COMMAND,
            message: message.into(),
        }
    }
}

/// One generated file.
#[derive(Debug, Clone, Serialize)]
pub struct FileWrittenEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub path: String,
    pub format: Format,
    pub hash: String,
    pub dry_run: bool,
}

impl FileWrittenEvent {
    pub fn new(path: String, format: Format, hash: String, dry_run: bool) -> Self {
        Self {
            event: "file_written",
            command: COMMAND,
            path,
            format,
            hash,
            dry_run,
        }
    }
}

/// Event emitted when a package build completes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub success: bool,
    pub package: Package,
    pub icons: usize,
    pub files: usize,
    pub deprecated: Vec<String>,
    pub dry_run: bool,
    pub duration_ms: u64,
}

impl CompleteEvent {
    pub fn new(
        package: Package,
        icons: usize,
        files: usize,
        deprecated: Vec<String>,
        dry_run: bool,
        duration_ms: u64,
    ) -> Self {
        Self {
            event: "complete",
            command: COMMAND,
            success: true,
            package,
            icons,
            files,
            deprecated,
            dry_run,
            duration_ms,
        }
    }
}

/// Event emitted when the build fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub command: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command: COMMAND,
            message: message.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}
