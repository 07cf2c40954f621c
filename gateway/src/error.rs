// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Errors from one gateway attempt against one candidate endpoint.
#[non_exhaustive]
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// The candidate could not serve the operation: transport failure,
    /// non-success status, or a body that does not look like event data.
    ///
    /// Expected and recoverable; the caller moves on to the next candidate
    /// or falls back to the local cache.
    #[error("endpoint unavailable: {0}")]
    Unavailable(String),

    /// The bearer credential was rejected (HTTP 401).
    ///
    /// Recoverable only by re-authentication; trying other candidates with
    /// the same credential would not help.
    #[error("authentication expired or rejected")]
    AuthExpired,
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        Self::Unavailable(e.to_string())
    }
}
