//! Core data models for iconpack
//!
//! Defines the fundamental data structures used throughout iconpack:
//! - `SourceAsset`: An enumerated SVG file with its derived component name
//! - `OutputFile`: A generated file, relative to a package output root
//! - `PackageManifest`: The `package.json` written next to each index
//! - `DeprecationList`: File names whose icons carry `@deprecated`
//! - Supporting enums: `Package`, `Format`

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Icon package to build
///
/// Each package maps to a directory of the same name under both the
/// optimized root and the output root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Package {
    /// The general-purpose icon set
    Icons,
    /// 24x24 stroked icons
    Outline,
    /// 24x24 filled icons
    Solid,
    /// 20x20 filled icons
    Mini,
}

impl Package {
    /// All packages, in build order
    pub const ALL: [Package; 4] = [
        Package::Icons,
        Package::Outline,
        Package::Solid,
        Package::Mini,
    ];

    /// Directory name under the optimized and output roots
    pub fn directory_name(&self) -> &'static str {
        match self {
            Package::Icons => "icons",
            Package::Outline => "outline",
            Package::Solid => "solid",
            Package::Mini => "mini",
        }
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.directory_name())
    }
}

/// Distribution format of a generated tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// ES modules (`import` / `export`), nested under `esm/`
    Esm,
    /// CommonJS (`require` / `module.exports`), at the package root
    Cjs,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Cjs, Format::Esm];

    /// Subdirectory of the package output root holding this format's tree
    pub fn subdirectory(&self) -> Option<&'static str> {
        match self {
            Format::Esm => Some("esm"),
            Format::Cjs => None,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Esm => write!(f, "esm"),
            Format::Cjs => write!(f, "cjs"),
        }
    }
}

/// An enumerated SVG source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAsset {
    /// Original file name, e.g. `arrow-right.svg`
    pub file_name: String,

    /// Full path the markup was read from
    pub source_path: PathBuf,

    /// Raw SVG markup
    pub markup: String,

    /// Component name derived from the file stem, e.g. `ArrowRight`
    pub identifier: String,

    /// Whether the file name is on the deprecation list
    pub deprecated: bool,
}

impl SourceAsset {
    pub fn new(
        file_name: impl Into<String>,
        source_path: impl Into<PathBuf>,
        markup: impl Into<String>,
        identifier: impl Into<String>,
        deprecated: bool,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            source_path: source_path.into(),
            markup: markup.into(),
            identifier: identifier.into(),
            deprecated,
        }
    }
}

/// File names whose icons are marked `@deprecated`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeprecationList {
    files: BTreeSet<String>,
}

impl DeprecationList {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `file_name` (e.g. `arrow-left.svg`) is deprecated
    pub fn contains(&self, file_name: &str) -> bool {
        self.files.contains(file_name)
    }

    /// Entries that match none of the given assets, sorted
    pub fn unmatched(&self, assets: &[SourceAsset]) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| !assets.iter().any(|a| &a.file_name == *f))
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A generated file ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    /// Path relative to the package output root (`esm/ArrowRight.js`)
    path: PathBuf,
    /// Generated content
    content: String,
    /// Format tree this file belongs to
    format: Format,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, format: Format) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// SHA-256 of the content, `sha256:` prefixed
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.content.as_bytes());
        format!("sha256:{:x}", hasher.finalize())
    }
}

/// Minimal `package.json` written at the root of each format tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(rename = "sideEffects")]
    pub side_effects: bool,
}

impl PackageManifest {
    /// Manifest for a format tree
    pub fn for_format(format: Format) -> Self {
        match format {
            Format::Cjs => Self {
                module: Some("./esm/index.js"),
                kind: None,
                side_effects: false,
            },
            Format::Esm => Self {
                module: None,
                kind: Some("module"),
                side_effects: false,
            },
        }
    }

    /// Pretty JSON (2-space indent) with a trailing newline
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
