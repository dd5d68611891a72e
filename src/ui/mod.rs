//! Terminal capability detection and NDJSON helpers

pub mod json;
pub mod terminal;
