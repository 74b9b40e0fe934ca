//! CLI infrastructure for the `oxo` binary
//!
//! This module provides the command-line interface for playing, simulating
//! series between automated players, and analysing positions.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::EnvFilter;

/// Install the global log subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `verbose`
/// and `warn` without.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
