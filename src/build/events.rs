//! Build Event Port
//!
//! Provides an observable interface for package builds.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::models::{Format, Package};

/// Event emitted during a package build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// Non-fatal problem (unknown config key, unmatched deprecation entry)
    Warning { message: String },

    /// Sources enumerated
    Started {
        package: Package,
        input: PathBuf,
        output: PathBuf,
        asset_count: usize,
    },

    /// Every artifact synthesized, nothing written yet
    Compiled { output_count: usize },

    /// Previous output tree removed
    Cleared { path: PathBuf },

    /// File written (or, in a dry run, would be written)
    FileWritten {
        path: PathBuf,
        format: Format,
        hash: String,
        dry_run: bool,
    },

    /// Build completed
    Completed {
        package: Package,
        icon_count: usize,
        file_count: usize,
        deprecated: Vec<String>,
        dry_run: bool,
        duration_ms: u64,
    },
}

/// Trait for receiving build events
///
/// Implementations:
/// - `TextEventSink`: human-readable terminal output
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Whether this sink wants one event per file
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

/// Event sink that records every event, for tests
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    pub events: std::sync::Mutex<Vec<BuildEvent>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn take(&self) -> Vec<BuildEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

#[cfg(test)]
impl BuildEventSink for RecordingSink {
    fn on_event(&self, event: BuildEvent) {
        self.events.lock().unwrap().push(event);
    }
}
