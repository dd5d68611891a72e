//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - One positional package name; a missing or unknown one is a usage error
//! - `--source` / `--out` override the config file and `ICONPACK_*` env vars

use std::path::PathBuf;

use clap::Parser;

use crate::models::Package;
use crate::presentation::OutputFormat;

/// iconpack - build React icon packages from optimized SVGs
#[derive(Parser, Debug)]
#[command(name = "iconpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Package to build
    #[arg(value_enum)]
    pub package: Package,

    /// Config file (default: iconpack.toml, skipped if absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory holding the optimized SVGs
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Root directory the package is written under
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Synthesize and report without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Output NDJSON events
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v lists written files, -vv pipeline stages)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}
