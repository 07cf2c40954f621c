// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

/// The name of the rota application.
pub const APP_NAME: &str = "rota";

/// Configuration for the rota client.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Base URL of the scheduling backend.
    pub base_url: String,

    /// Directory for durable state (event cache and credentials).
    /// Defaults to the platform state directory.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Ordered resource-path priority list for the events collection.
    /// Empty means the built-in default order.
    #[serde(default)]
    pub resources: Vec<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

const fn default_timeout() -> u64 {
    10
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".into());
        }

        if self.state_dir.is_none() {
            match dirs::state_dir().or_else(dirs::data_dir) {
                Some(dir) => self.state_dir = Some(dir.join(APP_NAME)),
                None => {
                    tracing::warn!("no state directory available; cache will be in-memory only");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rejects_empty_base_url() {
        let mut config = Config {
            base_url: "  ".to_string(),
            state_dir: None,
            resources: Vec::new(),
            timeout_secs: default_timeout(),
        };
        assert!(config.normalize().is_err());
    }

    #[test]
    fn normalize_keeps_an_explicit_state_dir() {
        let mut config = Config {
            base_url: "https://api.example-clinic.com".to_string(),
            state_dir: Some(PathBuf::from("/tmp/rota-test")),
            resources: Vec::new(),
            timeout_secs: default_timeout(),
        };
        config.normalize().expect("Failed to normalize");
        assert_eq!(config.state_dir, Some(PathBuf::from("/tmp/rota-test")));
    }
}
