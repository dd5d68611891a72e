//! Format adapters
//!
//! Each adapter turns `SourceAsset`s into the files of one distribution
//! format:
//! - `<Identifier>.js` / `<Identifier>.d.ts` per asset
//! - `index.js` / `index.d.ts` re-exporting every asset
//! - `package.json`
//!
//! Output paths are relative to the package output root.

pub mod cjs;
pub mod component;
pub mod declaration;
pub mod escaping;
pub mod esm;

use std::path::PathBuf;

pub use cjs::CjsAdapter;
pub use esm::EsmAdapter;

use crate::error::IconResult;
use crate::models::{Format, OutputFile, PackageManifest, SourceAsset};

/// Generates the file tree of one distribution format
pub trait FormatAdapter: Send + Sync {
    /// Format this adapter produces
    fn format(&self) -> Format;

    /// Component source and declaration for one asset
    fn compile(&self, asset: &SourceAsset) -> IconResult<Vec<OutputFile>> {
        let module = component::ComponentModule::from_markup(
            &asset.markup,
            &asset.identifier,
            asset.deprecated,
            &asset.source_path,
        )?;

        Ok(vec![
            OutputFile::new(
                self.path_for(&format!("{}.js", asset.identifier)),
                component::render(&module, self.format()),
                self.format(),
            ),
            OutputFile::new(
                self.path_for(&format!("{}.d.ts", asset.identifier)),
                declaration::declaration(&asset.identifier, asset.deprecated),
                self.format(),
            ),
        ])
    }

    /// One `index.js` line re-exporting `identifier`
    fn export_line(&self, identifier: &str) -> String;

    /// `index.js` and `index.d.ts` for the given identifiers, in order
    fn index(&self, identifiers: &[&str]) -> Vec<OutputFile> {
        let js: Vec<String> = identifiers.iter().map(|id| self.export_line(id)).collect();
        let dts: Vec<String> = identifiers.iter().map(|id| esm_reexport(id)).collect();

        vec![
            OutputFile::new(self.path_for("index.js"), join_lines(&js), self.format()),
            OutputFile::new(self.path_for("index.d.ts"), join_lines(&dts), self.format()),
        ]
    }

    /// `package.json` at the root of this format's tree
    fn manifest(&self) -> IconResult<OutputFile> {
        let json = PackageManifest::for_format(self.format()).to_json()?;
        Ok(OutputFile::new(
            self.path_for("package.json"),
            json,
            self.format(),
        ))
    }

    /// Path of `file_name` relative to the package output root
    fn path_for(&self, file_name: &str) -> PathBuf {
        match self.format().subdirectory() {
            Some(sub) => PathBuf::from(sub).join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

/// Extensionless ES re-export, shared by `esm/index.js` and every `index.d.ts`
pub(crate) fn esm_reexport(identifier: &str) -> String {
    format!("export {{ default as {identifier} }} from './{identifier}'")
}

fn join_lines(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Get all available adapters
pub fn all_adapters() -> Vec<Box<dyn FormatAdapter>> {
    vec![Box::new(CjsAdapter::new()), Box::new(EsmAdapter::new())]
}

/// Get adapter for a specific format
pub fn get_adapter(format: Format) -> Box<dyn FormatAdapter> {
    match format {
        Format::Cjs => Box::new(CjsAdapter::new()),
        Format::Esm => Box::new(EsmAdapter::new()),
    }
}
