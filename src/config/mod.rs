//! Configuration module for iconpack
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ICONPACK_*)
//! 3. Config file (iconpack.toml, optional)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, ENV_OPTIMIZED_DIR, ENV_OUTPUT_DIR};
pub use types::{Config, DeprecatedConfig, PathsConfig};

/// Config file looked up in the working directory by default
pub const DEFAULT_CONFIG_FILE: &str = "iconpack.toml";
