//! Event export converter.
//!
//! Reads a CSV export of chain events and writes a JSON object mapping each
//! event id to its description.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};

use cometnet_setup::cli;
use cometnet_setup::events::convert_events_file;

const USAGE: &str = "Usage: events-to-json <path_to_events_csv> <output_file>";

#[derive(Parser, Debug)]
#[command(name = "events-to-json")]
#[command(about = "Convert an exported event CSV into an id -> description JSON map")]
#[command(version)]
struct Cli {
    /// CSV export with a header row; column 2 is the event id, column 3 the description
    input: PathBuf,

    /// JSON file to write
    output: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli: Cli = cli::parse_or_exit(USAGE);

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Converting {} to {}", cli.input.display(), cli.output.display());
    let count = convert_events_file(&cli.input, &cli.output).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;
    log::info!("Wrote {} events", count);

    Ok(())
}
