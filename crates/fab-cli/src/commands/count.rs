//! `fab count`: number of abelian groups of one order.

use std::io::{self, Write};

use clap::Args;
use fab_core::{ErrorInfo, FabError, GroupOrder};
use fab_group::render::headline;
use fab_group::GroupCatalog;

use super::write_error;

/// Arguments for `fab count`.
#[derive(Args, Debug, Clone)]
pub struct CountArgs {
    /// Group order N (a positive integer).
    #[arg(allow_hyphen_values = true)]
    pub order: String,
    /// Print only the number.
    #[arg(long)]
    pub bare: bool,
}

/// Computes the product of partition numbers over the prime exponents.
pub fn count(order: GroupOrder) -> Result<u64, FabError> {
    GroupCatalog::new(order)?.count().ok_or_else(|| {
        FabError::Input(
            ErrorInfo::new("count-overflow", "group count does not fit in 64 bits")
                .with_context("order", order.to_string()),
        )
    })
}

/// Runs the subcommand against stdout.
pub fn run(args: &CountArgs) -> Result<(), FabError> {
    let order: GroupOrder = args.order.parse()?;
    let total = count(order)?;
    let line = if args.bare {
        total.to_string()
    } else {
        headline(total, order)
    };
    writeln!(io::stdout().lock(), "{line}").map_err(|err| write_error(None, err))
}
