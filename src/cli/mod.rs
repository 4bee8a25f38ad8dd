//! CLI infrastructure for the tic-tac-toe oracle
//!
//! This module provides the command-line interface for querying best moves
//! and perspective values, and for inspecting and exporting the game graph.

use tracing_subscriber::EnvFilter;

use self::config::EngineConfig;

pub mod commands;
pub mod config;
pub mod output;

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(config: &EngineConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
