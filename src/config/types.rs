//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::IconResult;
use crate::models::DeprecationList;

use super::loader::{self, ConfigWarning};

/// Input and output roots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root holding `<package>/*.svg`
    #[serde(default = "default_optimized")]
    pub optimized: PathBuf,

    /// Root the generated `<package>/` trees are written under
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            optimized: default_optimized(),
            output: default_output(),
        }
    }
}

fn default_optimized() -> PathBuf {
    PathBuf::from("optimized")
}

fn default_output() -> PathBuf {
    PathBuf::from("react")
}

/// Deprecated icons, by original file name
///
/// Accepts both a bare list and a table:
///   deprecated = ["arrow-left.svg"]
///
///   [deprecated]
///   files = ["arrow-left.svg"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct DeprecatedConfig {
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DeprecatedConfigDe {
    List(Vec<String>),
    Table {
        #[serde(default)]
        files: Vec<String>,
    },
}

impl<'de> Deserialize<'de> for DeprecatedConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match DeprecatedConfigDe::deserialize(deserializer)? {
            DeprecatedConfigDe::List(files) | DeprecatedConfigDe::Table { files } => {
                Ok(Self { files })
            }
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub deprecated: DeprecatedConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> IconResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> IconResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `path` if it exists, defaults otherwise; env overrides applied
    pub fn load_or_default(path: &Path) -> IconResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (ICONPACK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// The deprecation list handed to the enumerator
    pub fn deprecation_list(&self) -> DeprecationList {
        DeprecationList::new(self.deprecated.files.iter().cloned())
    }
}
