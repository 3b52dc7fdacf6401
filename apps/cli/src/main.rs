//! drupalarch CLI: inventory a configuration export as CSV reports.
//!
//! Scans a directory of exported YAML configuration and writes one CSV
//! per category (content types, taxonomies, views) plus one per content
//! type listing its fields.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse_from(commands::normalize_args(std::env::args_os()));
    let config = drupalarch_shared::load_config()?;
    commands::init_tracing(&config.logging);
    commands::run(cli, &config)
}
