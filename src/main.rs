#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::Result;
use clap::Parser;
use fitness_tracker::{cli, report, utils};
use std::io;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let stdout = io::stdout();
    report::run(&cli, &mut stdout.lock())?;
    Ok(())
}
