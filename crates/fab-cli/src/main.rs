use std::error::Error;

use clap::Parser;
use fab_cli::commands::{classify, count, partitions, version};
use fab_cli::{logging, Cli, Command};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;
    match cli.command {
        Command::Classify(args) => classify::run(&args)?,
        Command::Count(args) => count::run(&args)?,
        Command::Partitions(args) => partitions::run(&args)?,
        Command::Version(args) => version::run(&args),
    }
    Ok(())
}
