//! Subcommand implementations.

use std::path::Path;

use fab_core::{ErrorInfo, FabError};

pub mod classify;
pub mod count;
pub mod partitions;
pub mod version;

pub(crate) fn write_error(path: Option<&Path>, err: std::io::Error) -> FabError {
    let info = ErrorInfo::new("output-write", err.to_string());
    FabError::Io(match path {
        Some(path) => info.with_context("path", path.display().to_string()),
        None => info.with_context("path", "<stdout>"),
    })
}
