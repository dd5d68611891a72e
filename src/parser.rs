//! Source enumeration for icon packages
//!
//! Lists the `*.svg` files of a package directory, reads them, and derives
//! each component name and deprecation flag.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{IconError, IconResult};
use crate::models::{DeprecationList, SourceAsset};
use crate::naming;

/// Extension of source files, compared case-insensitively
const SOURCE_EXTENSION: &str = "svg";

/// Parse a single SVG source file
///
/// Reads the markup and derives the component name from the file stem.
/// The markup itself is only validated later, during synthesis.
pub fn parse_file(path: &Path, deprecated: &DeprecationList) -> IconResult<SourceAsset> {
    let markup = fs::read_to_string(path).map_err(|e| IconError::io(path, e))?;

    let file_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    let identifier = derive_identifier(path)?;
    let is_deprecated = deprecated.contains(&file_name);

    Ok(SourceAsset::new(
        file_name,
        path,
        markup,
        identifier,
        is_deprecated,
    ))
}

/// Enumerate and read every SVG file in `dir` (not recursive)
///
/// Fails on the first unreadable file. Assets come back sorted by
/// identifier, and identifiers are guaranteed unique.
pub fn parse_directory(dir: &Path, deprecated: &DeprecationList) -> IconResult<Vec<SourceAsset>> {
    if !dir.is_dir() {
        return Err(IconError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let paths = list_sources(dir)?;

    let mut assets = paths
        .par_iter()
        .map(|path| parse_file(path, deprecated))
        .collect::<IconResult<Vec<_>>>()?;

    // Sort by identifier, then file name, for deterministic output
    assets.sort_by(|a, b| {
        a.identifier
            .cmp(&b.identifier)
            .then_with(|| a.file_name.cmp(&b.file_name))
    });

    ensure_unique(&assets)?;

    Ok(assets)
}

fn list_sources(dir: &Path) -> IconResult<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| IconError::io(dir, e))? {
        let entry = entry.map_err(|e| IconError::io(dir, e))?;
        let path = entry.path();

        // Skip hidden files like .DS_Store
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.'))
            .unwrap_or(false);
        if hidden || !path.is_file() {
            continue;
        }

        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(SOURCE_EXTENSION))
            .unwrap_or(false);
        if is_svg {
            paths.push(path);
        }
    }

    Ok(paths)
}

/// Derive the component name from a source path
///
/// Converts `outline/arrow-right.svg` to `ArrowRight`.
pub fn derive_identifier(path: &Path) -> IconResult<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let identifier = naming::pascal_case(stem);

    naming::validate_identifier(&identifier).map_err(|reason| IconError::InvalidIdentifier {
        file: path.to_path_buf(),
        identifier: identifier.clone(),
        reason,
    })?;

    Ok(identifier)
}

fn ensure_unique(assets: &[SourceAsset]) -> IconResult<()> {
    let mut seen: HashMap<&str, &Path> = HashMap::new();
    for asset in assets {
        if let Some(first) = seen.insert(&asset.identifier, &asset.source_path) {
            return Err(IconError::DuplicateIdentifier {
                identifier: asset.identifier.clone(),
                first: first.to_path_buf(),
                second: asset.source_path.clone(),
            });
        }
    }
    Ok(())
}
