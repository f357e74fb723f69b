//! Tracing subscriber setup

use crate::config::LogConfig;
use tracing_subscriber::EnvFilter;

const FALLBACK_FILTER: &str = "warn";

/// Install the global subscriber, writing to stderr
///
/// `RUST_LOG` wins over the configured filter. A second call keeps the first
/// subscriber and logs the refusal at debug.
pub fn init(config: &LogConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(&config.filter));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        tracing::debug!(error = %e, "subscriber already installed");
    }
}

/// Filter from config, or `warn` if it does not parse
fn configured_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        eprintln!("ignoring log filter {directives:?}: {e}");
        EnvFilter::new(FALLBACK_FILTER)
    })
}
