// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Gateway configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the scheduling backend.
    pub base_url: String,

    /// Per-request timeout in seconds.
    ///
    /// A slow candidate only delays that one attempt before the caller moves
    /// on; there is no separate overall deadline.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_timeout() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("rota-gateway/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
