//! `fab partitions`: integer partitions of a single exponent.

use std::io::{self, Write};

use clap::Args;
use fab_core::FabError;
use fab_part::Partitions;

use super::write_error;

/// Arguments for `fab partitions`.
#[derive(Args, Debug, Clone)]
pub struct PartitionsArgs {
    /// Integer to partition.
    pub exponent: u32,
}

/// Writes one partition per line, largest first part first.
pub fn write_partitions<W: Write>(exponent: u32, out: &mut W) -> Result<(), FabError> {
    for partition in Partitions::new(exponent) {
        writeln!(out, "{partition}").map_err(|err| write_error(None, err))?;
    }
    Ok(())
}

/// Runs the subcommand against stdout.
pub fn run(args: &PartitionsArgs) -> Result<(), FabError> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_partitions(args.exponent, &mut writer)
}
