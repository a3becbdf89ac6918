//! Per-algorithm execution and bug tallies over a results tree.
//!
//! Scans `benchmarks/__results/<batch>/<run log>` and prints, for each
//! scheduling algorithm, how many signatures and distinct bugs have been
//! seen after each additional execution.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use tally::core::execution::Overflow;
use tally::exit_codes;
use tally::io::config::{TallyConfig, load_config};
use tally::io::discover::discover_runs;
use tally::logging;
use tally::render::{Format, render_tally};
use tally::report::{build_report, check_names};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Cumulative execution and bug counts per scheduling algorithm"
)]
struct Cli {
    /// Directory holding one subdirectory per result batch.
    #[arg(long)]
    results_dir: Option<PathBuf>,

    /// TOML file overriding algorithms, benchmarks, markers or the ceiling.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Fail on run files that match no configured benchmark and algorithm.
    #[arg(long)]
    strict: bool,
}

fn main() {
    logging::init("warn");
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        if let Some(overflow) = err.downcast_ref::<Overflow>() {
            eprintln!("{overflow}");
            std::process::exit(exit_codes::OVERFLOW);
        }
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TallyConfig::default(),
    };
    if let Some(results_dir) = &cli.results_dir {
        config.results_dir = results_dir.clone();
    }
    debug!(results_dir = %config.results_dir.display(), strict = cli.strict, "starting tally");

    let corpus = discover_runs(&config.results_dir)?;
    check_names(&corpus, &config, cli.strict)?;
    let reports = build_report(&corpus, &config)?;
    print!("{}", render_tally(&reports, cli.format)?);
    Ok(())
}
