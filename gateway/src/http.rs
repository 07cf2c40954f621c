// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with bearer authentication and status mapping.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::GatewayConfig;
use crate::error::GatewayError;

/// Capability for reading the current bearer credential.
///
/// The credential lives in durable storage owned by the application core; the
/// gateway reads it through this trait before every request instead of
/// holding a snapshot, so a token saved by the login flow takes effect
/// immediately.
#[async_trait::async_trait]
pub trait TokenProvider: fmt::Debug + Send + Sync {
    /// The bearer token to attach to the next request.
    async fn token(&self) -> String;
}

/// A fixed token, mainly for tests and one-off scripts.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait::async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> String {
        self.0.clone()
    }
}

/// HTTP client for gateway operations.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpClient {
    /// Creates a new HTTP client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(
        config: &GatewayConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, tokens })
    }

    /// Builds a request with the current bearer credential attached.
    pub async fn build_request(&self, method: Method, url: &str) -> RequestBuilder {
        let token = self.tokens.token().await;
        self.client.request(method, url).bearer_auth(token)
    }

    /// Executes a request and maps the response status.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::AuthExpired`] for HTTP 401 and
    /// [`GatewayError::Unavailable`] for transport failures or any other
    /// non-success status.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, GatewayError> {
        let resp = req.send().await?;

        match resp.status() {
            StatusCode::UNAUTHORIZED => Err(GatewayError::AuthExpired),
            status if status.is_success() => Ok(resp),
            status => Err(GatewayError::Unavailable(format!(
                "unexpected status {status}"
            ))),
        }
    }
}
