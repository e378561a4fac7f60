//! Connection settings loaded from TOML
//!
//! ```toml
//! url = "https://198.51.100.10"
//! username = "admin"
//! password = "admin"
//! timeout_secs = 30
//! ```

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{RestconfError, Result};

/// Request timeout used when the configuration does not set one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// RESTCONF device connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Device base URL, e.g. `https://198.51.100.10`
    pub url: String,

    pub username: String,

    pub password: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            RestconfError::Config(format!(
                "failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl FromStr for ClientConfig {
    type Err = RestconfError;

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| RestconfError::Config(e.to_string()))
    }
}
