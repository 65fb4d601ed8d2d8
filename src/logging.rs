use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{EspnError, Result};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "swishradar=info,tower_http=info";

/// Installs the global `tracing` subscriber.
///
/// Logs go to stdout. `RUST_LOG` overrides the default filter.
pub fn setup_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init()
        .map_err(|e| EspnError::config(format!("Failed to install logging: {e}")))
}
