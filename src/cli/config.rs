//! Engine configuration shared across commands

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Runtime configuration for the oracle binary
///
/// Loaded from an optional JSON file; command-line flags override it.
///
/// # Examples
///
/// ```
/// use tictactoe_oracle::cli::config::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_precompute(true)
///     .with_log_filter("debug");
/// assert!(config.precompute);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Solve every node bottom-up before answering queries
    pub precompute: bool,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            precompute: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl EngineConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn with_precompute(mut self, precompute: bool) -> Self {
        self.precompute = precompute;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
