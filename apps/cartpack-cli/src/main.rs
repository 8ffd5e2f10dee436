//! # cartpack
//!
//! Packs a cart manifest into shipping containers and prints the result.
//!
//! ## Usage
//! ```bash
//! # Pack a manifest, compact JSON on stdout
//! cargo run -p cartpack-cli -- ./cart.json
//!
//! # Pretty output with each item's ranked containers
//! cargo run -p cartpack-cli -- ./cart.json --pretty --fit-table
//!
//! # Explicit config file, debug logs on stderr
//! CARTPACK_LOG_LEVEL=debug cargo run -p cartpack-cli -- ./cart.json --config ./cartpack.toml
//! ```
//!
//! ## Flow
//! ```text
//! args ──► CliConfig::load ──► init_tracing
//!                                  │
//!   Manifest::load ──► packing_items ──► pack_products_observed
//!                                              │
//!                            build_report ──► stdout (JSON)
//! ```

mod config;
mod error;
mod manifest;
mod observer;
mod report;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use cartpack_core::pack_products_observed;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::manifest::Manifest;
use crate::observer::TracingObserver;
use crate::report::{build_report, render};

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq)]
struct Args {
    manifest: PathBuf,
    config: Option<PathBuf>,
    pretty: bool,
    fit_table: bool,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> CliResult<Self> {
        let mut manifest = None;
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--config needs a path".to_string()))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--pretty" => parsed.pretty = true,
                "--fit-table" => parsed.fit_table = true,
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("Unknown option: {flag}")));
                }
                path => {
                    if manifest.replace(PathBuf::from(path)).is_some() {
                        return Err(CliError::Usage("Only one manifest path allowed".to_string()));
                    }
                }
            }
        }

        parsed.manifest =
            manifest.ok_or_else(|| CliError::Usage("Missing manifest path".to_string()))?;
        Ok(parsed)
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> CliResult<()> {
    let args = Args::parse(env::args().skip(1))?;

    let mut config = CliConfig::load(args.config.clone())?;
    config.output.pretty |= args.pretty;
    config.output.include_fit_table |= args.fit_table;

    init_tracing(&config.log.level);

    let manifest = Manifest::load(&args.manifest)?;
    let items = manifest.packing_items(config.limits.max_items)?;
    info!(
        manifest = %args.manifest.display(),
        items = items.len(),
        containers = manifest.containers.len(),
        "Manifest loaded"
    );

    let summary = pack_products_observed(&items, &manifest.containers, &TracingObserver)?;

    let report = build_report(
        &items,
        &manifest.containers,
        &summary,
        config.output.include_fit_table,
    );
    println!("{}", render(&report, config.output.pretty)?);

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cartpack: {e}");
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
