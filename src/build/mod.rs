//! Package build pipeline
//!
//! ```text
//! enumerate sources -> synthesize (parallel) -> clear output -> write per-asset files (parallel)
//!                   -> write index per format -> write manifests
//! ```
//!
//! Everything is synthesized in memory before the output tree is touched,
//! so a bad source file aborts the build without deleting the previous one.

pub mod events;
pub mod writer;

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use crate::adapters::{all_adapters, FormatAdapter};
use crate::config::Config;
use crate::error::{IconError, IconResult};
use crate::models::{DeprecationList, Format, OutputFile, Package, SourceAsset};
use crate::parser::parse_directory;

pub use events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use writer::{atomic_write, clear_dir};

/// Options for a package build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub package: Package,
    /// Root holding `<package>/*.svg`
    pub optimized_root: PathBuf,
    /// Root the `<package>/` tree is written under
    pub output_root: PathBuf,
    pub deprecated: DeprecationList,
    /// Synthesize and report, but do not touch the output tree
    pub dry_run: bool,
}

impl BuildOptions {
    /// Options for `package` using the configured paths and deprecation list
    pub fn from_config(package: Package, config: &Config) -> Self {
        Self {
            package,
            optimized_root: config.paths.optimized.clone(),
            output_root: config.paths.output.clone(),
            deprecated: config.deprecation_list(),
            dry_run: false,
        }
    }

    /// `<optimized_root>/<package>`
    pub fn input_dir(&self) -> PathBuf {
        self.optimized_root.join(self.package.directory_name())
    }

    /// `<output_root>/<package>`
    pub fn output_dir(&self) -> PathBuf {
        self.output_root.join(self.package.directory_name())
    }
}

/// Result of a package build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub package: Package,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Component names, sorted
    pub icons: Vec<String>,
    /// Component names marked deprecated
    pub deprecated: Vec<String>,
    /// Deprecation entries that matched no source file
    pub unmatched_deprecations: Vec<String>,
    /// Files written (or planned, in a dry run), in write order
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Everything one format contributes to the package
#[derive(Debug)]
struct FormatPlan {
    format: Format,
    components: Vec<OutputFile>,
    index: Vec<OutputFile>,
    manifest: OutputFile,
}

impl FormatPlan {
    fn file_count(&self) -> usize {
        self.components.len() + self.index.len() + 1
    }
}

/// Build one package: both format trees, indexes and manifests
///
/// Fails fast: the first enumeration, synthesis or write error aborts the
/// whole build.
pub fn build_package(options: &BuildOptions, sink: &dyn BuildEventSink) -> IconResult<BuildReport> {
    let started = Instant::now();
    let input = options.input_dir();
    let output = options.output_dir();

    ensure_disjoint(&input, &output)?;
    let assets = parse_directory(&input, &options.deprecated)?;
    sink.on_event(BuildEvent::Started {
        package: options.package,
        input: input.clone(),
        output: output.clone(),
        asset_count: assets.len(),
    });

    let unmatched_deprecations = options.deprecated.unmatched(&assets);
    for entry in &unmatched_deprecations {
        sink.on_event(BuildEvent::Warning {
            message: format!(
                "Deprecated icon '{}' not found in {}",
                entry,
                input.display()
            ),
        });
    }

    let plans = all_adapters()
        .iter()
        .map(|adapter| plan_format(adapter.as_ref(), &assets))
        .collect::<IconResult<Vec<_>>>()?;
    sink.on_event(BuildEvent::Compiled {
        output_count: plans.iter().map(FormatPlan::file_count).sum(),
    });

    if !options.dry_run {
        clear_dir(&output)?;
        sink.on_event(BuildEvent::Cleared {
            path: output.clone(),
        });

        plans
            .par_iter()
            .try_for_each(|plan| write_format(&output, plan))?;

        for plan in &plans {
            write_output(&output, &plan.manifest)?;
        }
    }

    let mut files = Vec::new();
    for file in plans.iter().flat_map(write_order) {
        let path = output.join(file.path());
        if sink.wants_detailed_events() {
            sink.on_event(BuildEvent::FileWritten {
                path: path.clone(),
                format: file.format(),
                hash: file.hash(),
                dry_run: options.dry_run,
            });
        }
        files.push(path);
    }
    // Manifests are written after every index
    files.extend(plans.iter().map(|plan| output.join(plan.manifest.path())));
    if sink.wants_detailed_events() {
        for plan in &plans {
            sink.on_event(BuildEvent::FileWritten {
                path: output.join(plan.manifest.path()),
                format: plan.format,
                hash: plan.manifest.hash(),
                dry_run: options.dry_run,
            });
        }
    }

    let report = BuildReport {
        package: options.package,
        input,
        output,
        icons: assets.iter().map(|a| a.identifier.clone()).collect(),
        deprecated: assets
            .iter()
            .filter(|a| a.deprecated)
            .map(|a| a.identifier.clone())
            .collect(),
        unmatched_deprecations,
        files,
        dry_run: options.dry_run,
    };

    sink.on_event(BuildEvent::Completed {
        package: report.package,
        icon_count: report.icons.len(),
        file_count: report.files.len(),
        deprecated: report.deprecated.clone(),
        dry_run: report.dry_run,
        duration_ms: started.elapsed().as_millis() as u64,
    });

    Ok(report)
}

/// Refuse an output directory that is, contains or sits inside the input
///
/// The output directory is cleared before writing, so any overlap would
/// delete sources.
fn ensure_disjoint(input: &Path, output: &Path) -> IconResult<()> {
    let resolved_input = resolve(input)?;
    let resolved_output = resolve(output)?;

    if resolved_input.starts_with(&resolved_output)
        || resolved_output.starts_with(&resolved_input)
    {
        return Err(IconError::OverlappingDirectories {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        });
    }
    Ok(())
}

/// Absolute form of `path`, canonicalizing its longest existing prefix
fn resolve(path: &Path) -> IconResult<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| IconError::io(path, e))?
            .join(path)
    };

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return Ok(missing
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, part| acc.join(part)));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => return Ok(absolute),
        }
    }
}

/// Synthesize every file of one format in memory
fn plan_format(adapter: &dyn FormatAdapter, assets: &[SourceAsset]) -> IconResult<FormatPlan> {
    let components = assets
        .par_iter()
        .map(|asset| adapter.compile(asset))
        .collect::<IconResult<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    let identifiers: Vec<&str> = assets.iter().map(|a| a.identifier.as_str()).collect();

    Ok(FormatPlan {
        format: adapter.format(),
        components,
        index: adapter.index(&identifiers),
        manifest: adapter.manifest()?,
    })
}

/// Write a format's components, then its index once all of them landed
fn write_format(output: &Path, plan: &FormatPlan) -> IconResult<()> {
    plan.components
        .par_iter()
        .try_for_each(|file| write_output(output, file))?;

    for file in &plan.index {
        write_output(output, file)?;
    }

    Ok(())
}

fn write_order(plan: &FormatPlan) -> impl Iterator<Item = &OutputFile> {
    plan.components.iter().chain(plan.index.iter())
}

fn write_output(output: &Path, file: &OutputFile) -> IconResult<()> {
    atomic_write(&output.join(file.path()), file.content().as_bytes())
}
