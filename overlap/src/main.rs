//! Three-way line overlap between text files.
//!
//! Treats each file as a set of lines and prints how many lines each file
//! has, and how many fall in each region of the three-set Venn diagram.

mod lines;
mod render;
mod venn;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use tally::exit_codes;
use tally::logging;
use tally::render::Format;

use crate::lines::read_line_set;
use crate::render::render_overlap;
use crate::venn::Overlap;

#[derive(Parser)]
#[command(name = "overlap", version, about = "Venn counts for three files of lines")]
struct Cli {
    first: PathBuf,
    second: PathBuf,
    third: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() {
    logging::init("warn");
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let first = read_line_set(&cli.first)?;
    let second = read_line_set(&cli.second)?;
    let third = read_line_set(&cli.third)?;
    debug!(
        first = first.len(),
        second = second.len(),
        third = third.len(),
        "line sets loaded"
    );

    let overlap = Overlap::compute(&first, &second, &third);
    let names = [
        cli.first.display().to_string(),
        cli.second.display().to_string(),
        cli.third.display().to_string(),
    ];
    let names = [names[0].as_str(), names[1].as_str(), names[2].as_str()];
    print!("{}", render_overlap(&overlap, names, cli.format)?);
    Ok(())
}
