//! ctigroup CLI — groups CTI-tagged ticket titles for bulk import.
//!
//! Reads a tab-delimited `Category/Type/Item,Title` file and writes one JSON
//! record per unique (type, item) pair.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::try_parse().unwrap_or_else(|err| commands::usage_exit(err));
    commands::init_tracing(&cli);
    commands::run(&cli)
}
