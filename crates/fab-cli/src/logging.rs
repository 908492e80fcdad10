//! Process-wide tracing setup.

use fab_core::{ErrorInfo, FabError};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) -> Result<(), FabError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|err| {
        FabError::Config(
            ErrorInfo::new("logging-init", err.to_string()).with_context("level", level),
        )
    })
}
