//! Logging setup: `log` macros routed through tracing-subscriber.
//!
//! Logs go to stderr so stdout stays clean for query output.

use tracing_subscriber::EnvFilter;

/// Base level when `RUST_LOG` is unset.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Build the filter: `RUST_LOG` wins, otherwise `level` with rusqlite kept quiet.
pub fn build_env_filter(level: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directives = format!("{},rusqlite=warn", level);
    EnvFilter::try_new(&directives)
        .map_err(|e| anyhow::anyhow!("Invalid log filter '{}': {}", directives, e))
}

/// Install the global subscriber. Also bridges the `log` facade.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let filter = build_env_filter(default_level(verbose))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
