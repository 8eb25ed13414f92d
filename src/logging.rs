//! Logging initialization
//!
//! All command outcomes are reported through `tracing` log lines; there is
//! no machine-readable output mode. The verbose flag forces debug level,
//! otherwise the configured level applies, and `VIGILCTL_LOG` can override
//! both from the environment.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. Called once per invocation, after
/// argument parsing has determined whether verbose mode is on.
pub fn init(verbose: bool, config_level: &str) {
    let level = if verbose { "debug" } else { config_level };

    let filter = EnvFilter::try_from_env("VIGILCTL_LOG").unwrap_or_else(|_| {
        EnvFilter::new(level.parse::<tracing::Level>().map_or("info", |_| level))
    });

    // A second init (e.g. in tests) is harmless; ignore the error.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    if verbose {
        tracing::debug!("Verbose logging enabled");
    }
}
