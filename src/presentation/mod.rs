//! Presentation Layer
//!
//! Parses the command line and renders build events for the terminal:
//!
//! - `cli` - clap argument definitions
//! - `output` - human-readable text (`TextEventSink`) and the `Reporter` front end
//! - `json` - NDJSON event stream (`JsonEventSink`)

pub mod cli;
pub mod json;
pub mod output;

pub use cli::Cli;
pub use json::JsonEventSink;
pub use output::{OutputFormat, Reporter, TextEventSink};
