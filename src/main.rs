//! iconpack CLI - build a React icon package from optimized SVGs
//!
//! Usage: iconpack [OPTIONS] <PACKAGE>
//!
//! Packages:
//!   icons    general-purpose icon set
//!   outline  24x24 stroked icons
//!   solid    24x24 filled icons
//!   mini     20x20 filled icons

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use iconpack::build::{build_package, BuildOptions};
use iconpack::config::{Config, DEFAULT_CONFIG_FILE};
use iconpack::error::IconError;
use iconpack::presentation::{Cli, Reporter};
use iconpack::ui::terminal::detect_capabilities;

fn main() {
    let cli = Cli::parse();
    let caps = detect_capabilities();
    let reporter = Reporter::new(cli.output_format(), caps, cli.verbose);

    if let Err(err) = run(&cli, &reporter) {
        let file = err.downcast_ref::<IconError>().and_then(IconError::file);
        reporter.error(&format!("{err:#}"), file);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, reporter: &Reporter) -> Result<()> {
    let (mut config, warnings) = load_config(cli.config.as_deref())?;
    for warning in &warnings {
        reporter.warning(warning.to_string());
    }

    if let Some(source) = &cli.source {
        config.paths.optimized = source.clone();
    }
    if let Some(out) = &cli.out {
        config.paths.output = out.clone();
    }

    let mut options = BuildOptions::from_config(cli.package, &config);
    options.dry_run = cli.dry_run;

    reporter.begin(cli.package);
    build_package(&options, reporter.sink())
        .with_context(|| format!("Failed to build {} package", cli.package))?;

    Ok(())
}

/// An explicit `--config` must exist; the default file is optional
fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<iconpack::config::ConfigWarning>)> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            Ok((config.with_env_overrides(), warnings))
        }
        None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
            .with_context(|| format!("Failed to load config from {DEFAULT_CONFIG_FILE}")),
    }
}
