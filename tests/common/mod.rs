//! Common test utilities for iconpack CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated workspace with `optimized/` and `react/` roots
//! - Fixtures: Reusable SVG sources

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
