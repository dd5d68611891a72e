//! Output Rendering
//!
//! Turns build events into terminal text or an NDJSON stream.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::build::{BuildEvent, BuildEventSink};
use crate::models::Package;
use crate::presentation::json::JsonEventSink;
use crate::ui::terminal::TerminalCapabilities;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON events for scripting
    Json,
}

/// Icons for output rendering, colored when the terminal allows it
struct Icons {
    check: String,
    cross: String,
    write: String,
    warn: String,
}

impl Icons {
    fn for_terminal(caps: TerminalCapabilities) -> Self {
        let (check, cross, write, warn) = if caps.supports_unicode {
            ("✓", "✗", "→", "⚠")
        } else {
            ("[OK]", "[FAIL]", "->", "[!]")
        };

        let paint = |symbol: &str, color: Color| {
            if caps.supports_color {
                symbol.with(color).to_string()
            } else {
                symbol.to_string()
            }
        };

        Self {
            check: paint(check, Color::Green),
            cross: paint(cross, Color::Red),
            write: paint(write, Color::DarkGrey),
            warn: paint(warn, Color::Yellow),
        }
    }
}

/// Human-readable event sink
///
/// Progress goes to `out`, warnings to `err`. Per-file lines only show
/// up at `-v`, pipeline stages at `-vv`.
pub struct TextEventSink {
    icons: Icons,
    verbose: u8,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl TextEventSink {
    /// Sink writing to stdout and stderr
    pub fn stdio(caps: TerminalCapabilities, verbose: u8) -> Self {
        Self::with_writers(caps, verbose, io::stdout(), io::stderr())
    }

    /// Sink writing to custom writers (for testing)
    pub fn with_writers<O, E>(caps: TerminalCapabilities, verbose: u8, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            icons: Icons::for_terminal(caps),
            verbose,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    /// Banner printed before enumeration starts
    pub fn begin(&self, package: Package) {
        self.line(&self.out, &format!("Building {package} package..."));
    }

    /// Final error line
    pub fn error(&self, message: &str) {
        self.line(&self.err, &format!("{} Error: {}", self.icons.cross, message));
    }

    fn line(&self, target: &Mutex<Box<dyn Write + Send>>, text: &str) {
        if let Ok(mut writer) = target.lock() {
            let _ = writeln!(writer, "{text}");
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for TextEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Warning { message } => {
                self.line(&self.err, &format!("{} {}", self.icons.warn, message));
            }

            BuildEvent::Started {
                input, asset_count, ..
            } if self.verbose > 0 => {
                self.line(
                    &self.out,
                    &format!("  Source: {} ({} icons)", input.display(), asset_count),
                );
            }

            BuildEvent::Compiled { output_count } if self.verbose > 1 => {
                self.line(&self.out, &format!("  Synthesized {output_count} files"));
            }

            BuildEvent::Cleared { path } if self.verbose > 1 => {
                self.line(&self.out, &format!("  Cleared {}", path.display()));
            }

            BuildEvent::FileWritten { path, .. } if self.verbose > 0 => {
                self.line(
                    &self.out,
                    &format!("    {} {}", self.icons.write, path.display()),
                );
            }

            BuildEvent::Completed {
                package,
                icon_count,
                file_count,
                deprecated,
                dry_run,
                ..
            } => {
                if !deprecated.is_empty() {
                    self.line(&self.out, &format!("  Deprecated: {}", deprecated.join(", ")));
                }
                let summary = if dry_run {
                    format!(
                        "{} Dry run: {} package would be built ({} icons, {} files).",
                        self.icons.check, package, icon_count, file_count
                    )
                } else {
                    format!(
                        "{} Finished building {} package ({} icons, {} files).",
                        self.icons.check, package, icon_count, file_count
                    )
                };
                self.line(&self.out, &summary);
            }

            _ => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose > 0
    }
}

/// Front end for one CLI run: the event sink plus the lines around it
pub enum Reporter {
    Text(TextEventSink),
    Json(JsonEventSink),
}

impl Reporter {
    /// Create a reporter for the requested format
    pub fn new(format: OutputFormat, caps: TerminalCapabilities, verbose: u8) -> Self {
        match format {
            OutputFormat::Text => Reporter::Text(TextEventSink::stdio(caps, verbose)),
            OutputFormat::Json => Reporter::Json(JsonEventSink::stdout()),
        }
    }

    pub fn sink(&self) -> &dyn BuildEventSink {
        match self {
            Reporter::Text(sink) => sink,
            Reporter::Json(sink) => sink,
        }
    }

    /// Announce a package build (text mode only)
    pub fn begin(&self, package: Package) {
        if let Reporter::Text(sink) = self {
            sink.begin(package);
        }
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.sink().on_event(BuildEvent::Warning {
            message: message.into(),
        });
    }

    /// Report the error that ends the run
    pub fn error(&self, message: &str, file: Option<&Path>) {
        match self {
            Reporter::Text(sink) => sink.error(message),
            Reporter::Json(sink) => sink.error(message, file),
        }
    }
}
