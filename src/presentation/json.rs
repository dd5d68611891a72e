//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use serde::Serialize;

use crate::build::{BuildEvent, BuildEventSink};
use crate::ui::json::events::{
    CompleteEvent, ErrorEvent, FileWrittenEvent, StartEvent, WarningEvent,
};
use crate::ui::json::write_typed_event;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Report a failed build as an `error` event
    pub fn error(&self, message: &str, file: Option<&Path>) {
        let mut event = ErrorEvent::new(message);
        if let Some(file) = file {
            event = event.with_file(file.display().to_string());
        }
        self.write_event(&event);
    }

    fn write_event<T: Serialize>(&self, event: &T) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = write_typed_event(&mut *writer, event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Warning { message } => self.write_event(&WarningEvent::new(message)),

            BuildEvent::Started {
                package,
                input,
                output,
                asset_count,
            } => self.write_event(&StartEvent::new(
                package,
                input.display().to_string(),
                output.display().to_string(),
                asset_count,
            )),

            BuildEvent::FileWritten {
                path,
                format,
                hash,
                dry_run,
            } => self.write_event(&FileWrittenEvent::new(
                path.display().to_string(),
                format,
                hash,
                dry_run,
            )),

            BuildEvent::Completed {
                package,
                icon_count,
                file_count,
                deprecated,
                dry_run,
                duration_ms,
            } => self.write_event(&CompleteEvent::new(
                package,
                icon_count,
                file_count,
                deprecated,
                dry_run,
                duration_ms,
            )),

            // Internal stages, not part of the stream
            BuildEvent::Compiled { .. } | BuildEvent::Cleared { .. } => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
