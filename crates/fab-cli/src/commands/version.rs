//! `fab version`.

use clap::Args;
use fab_core::REPORT_SCHEMA;

/// Arguments for `fab version`.
#[derive(Args, Debug, Clone)]
pub struct VersionArgs {
    /// Also print the JSON report schema version.
    #[arg(long)]
    pub long: bool,
}

/// Prints the package version.
pub fn run(args: &VersionArgs) {
    println!("{}", env!("CARGO_PKG_VERSION"));
    if args.long {
        println!("report schema {REPORT_SCHEMA}");
    }
}
