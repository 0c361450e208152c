//! Tracing subscriber setup

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `default_level`. Output goes to stderr so command
/// output on stdout stays machine-readable.
pub fn init(default_level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid log filter '{default_level}': {e}"))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = if json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.with_target(false).try_init()
    };

    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
