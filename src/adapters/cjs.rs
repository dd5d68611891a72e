//! CommonJS adapter
//!
//! Generates the package-root tree:
//! - `<Identifier>.js` - `require` / `module.exports` component
//! - `index.js` - `module.exports.X = require("./X.js")` per icon
//! - `package.json` - points bundlers at `./esm/index.js`
//!
//! `require` does not resolve extensionless paths the way bundlers do, so
//! index entries carry the `.js` suffix.

use crate::adapters::FormatAdapter;
use crate::models::Format;

/// CommonJS adapter
pub struct CjsAdapter;

impl CjsAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CjsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatAdapter for CjsAdapter {
    fn format(&self) -> Format {
        Format::Cjs
    }

    fn export_line(&self, identifier: &str) -> String {
        format!("module.exports.{identifier} = require(\"./{identifier}.js\")")
    }
}
