//! Process-wide `tracing` subscriber.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, ObservabilityConfig};

/// Install the global subscriber
///
/// `RUST_LOG` wins over `observability.log_level`. Calling this twice is
/// harmless; the second call only logs a warning.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match config.log_format {
        LogFormat::Json => fmt().with_env_filter(filter).json().try_init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).try_init(),
    };

    if let Err(e) = result {
        ::tracing::warn!(error = %e, "tracing init failed");
    }
}
