//! Log file setup for the binary.
//!
//! Library code only emits `tracing` events. The subscriber is installed
//! once by `main`, so anything embedding the pipeline can bring its own.
//! `RUST_LOG` overrides the default `info` filter.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::{
    fmt::{self, time::SystemTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Install a subscriber that appends timestamped lines to `path`.
pub fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_target(false)
                .with_ansi(false)
                .with_timer(SystemTime),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}
