//! iconpack - React icon package generator
//!
//! iconpack turns a directory of optimized SVG files into a publishable React
//! icon package: one ref-forwarding component per icon, emitted both as ES
//! modules and as CommonJS, with TypeScript declarations, index files and
//! `package.json` manifests.

pub mod adapters;
pub mod build;
pub mod config;
pub mod error;
pub mod models;
pub mod naming;
pub mod parser;
pub mod presentation;
pub mod svg;
pub mod ui;

// Re-exports for convenience
pub use adapters::{all_adapters, get_adapter, FormatAdapter};
pub use build::{build_package, BuildEvent, BuildEventSink, BuildOptions, BuildReport};
pub use config::Config;
pub use error::{IconError, IconResult};
pub use models::{DeprecationList, Format, OutputFile, Package, SourceAsset};
pub use parser::{parse_directory, parse_file};
