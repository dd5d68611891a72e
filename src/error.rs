//! Error types for iconpack
//!
//! Library code returns `IconResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for iconpack operations
pub type IconResult<T> = Result<T, IconError>;

/// Main error type for iconpack operations
#[derive(Error, Debug)]
pub enum IconError {
    /// IO error tied to a concrete path
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input directory missing or not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Markup could not be parsed as XML
    #[error("invalid SVG in {file}: {message}")]
    InvalidSvg { file: PathBuf, message: String },

    /// Document root is some other element
    #[error("expected <svg> root element in {file}, found <{root}>")]
    NotSvg { file: PathBuf, root: String },

    /// File name does not produce a usable component name
    #[error("cannot use '{identifier}' (from {file}) as a component name: {reason}")]
    InvalidIdentifier {
        file: PathBuf,
        identifier: String,
        reason: &'static str,
    },

    /// Two source files map to the same component name
    #[error("duplicate component name '{identifier}': {first} and {second}")]
    DuplicateIdentifier {
        identifier: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Input and output package directories overlap
    #[error("output directory {output} overlaps input directory {input}")]
    OverlappingDirectories { input: PathBuf, output: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IconError {
    /// Wrap an `std::io::Error` with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }

    /// The file this error points at, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            IconError::Io { path, .. } | IconError::DirectoryNotFound { path } => Some(path),
            IconError::OverlappingDirectories { output, .. } => Some(output),
            IconError::InvalidSvg { file, .. }
            | IconError::NotSvg { file, .. }
            | IconError::InvalidIdentifier { file, .. }
            | IconError::InvalidConfig { file, .. } => Some(file),
            IconError::DuplicateIdentifier { second, .. } => Some(second),
            IconError::Json(_) => None,
        }
    }
}
