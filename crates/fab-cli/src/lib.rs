#![deny(missing_docs)]
#![doc = "Command line surface of the FAB classifier: argument parsing, output \
configuration and logging setup."]

pub mod commands;
pub mod config;
pub mod logging;

use clap::{Parser, Subcommand};

use commands::{
    classify::ClassifyArgs, count::CountArgs, partitions::PartitionsArgs, version::VersionArgs,
};

/// Top-level argument parser.
#[derive(Parser, Debug)]
#[command(name = "fab", about = "Classifies finite abelian groups of a given order")]
pub struct Cli {
    /// Default log filter when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every abelian group of order N.
    Classify(ClassifyArgs),
    /// Count the abelian groups of order N without listing them.
    Count(CountArgs),
    /// List the integer partitions of an exponent.
    Partitions(PartitionsArgs),
    /// Print the tool version.
    Version(VersionArgs),
}
