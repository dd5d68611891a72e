//! ES module adapter
//!
//! Generates the `esm/` tree:
//! - `esm/<Identifier>.js` - `import` / `export default` component
//! - `esm/index.js` - extensionless re-exports
//! - `esm/package.json` - `"type": "module"`

use crate::adapters::{esm_reexport, FormatAdapter};
use crate::models::Format;

/// ES module adapter
pub struct EsmAdapter;

impl EsmAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EsmAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatAdapter for EsmAdapter {
    fn format(&self) -> Format {
        Format::Esm
    }

    fn export_line(&self, identifier: &str) -> String {
        esm_reexport(identifier)
    }
}
