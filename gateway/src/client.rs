// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Remote event gateway: one network attempt against one resolved endpoint.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::config::GatewayConfig;
use crate::endpoint::Endpoint;
use crate::error::GatewayError;
use crate::event::{Event, EventDraft};
use crate::http::{HttpClient, TokenProvider};
use crate::wire;

/// Client for the events collection of a scheduling backend.
///
/// Each method performs exactly one attempt against one candidate endpoint
/// and reports failure as a typed, recoverable error; candidate iteration
/// and fallback policy belong to the caller.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use rota_gateway::{EventGateway, GatewayConfig, StaticToken, Endpoint};
///
/// # async fn example() -> Result<(), rota_gateway::GatewayError> {
/// let config = GatewayConfig {
///     base_url: "https://api.example-clinic.com".to_string(),
///     ..Default::default()
/// };
/// let gateway = EventGateway::new(config, Arc::new(StaticToken("token".into())))?;
/// let events = gateway.list(&Endpoint::new("/bookings")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventGateway {
    http: HttpClient,
    config: GatewayConfig,
}

impl EventGateway {
    /// Creates a new gateway.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(
        config: GatewayConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, GatewayError> {
        let http = HttpClient::new(&config, tokens)?;
        Ok(Self { http, config })
    }

    /// Fetches the event collection from one candidate endpoint.
    ///
    /// Records that cannot be normalized (no usable id or start) are skipped
    /// with a warning rather than failing the whole listing.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unavailable`] on transport failure, a
    /// non-success status, or a body that is not a JSON array, and
    /// [`GatewayError::AuthExpired`] on HTTP 401.
    pub async fn list(&self, endpoint: &Endpoint) -> Result<Vec<Event>, GatewayError> {
        let url = self.full_url(endpoint);
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url).await)
            .await?;

        let body: Value = resp
            .json()
            .await
            .map_err(|e| GatewayError::Unavailable(format!("malformed body: {e}")))?;

        let Value::Array(records) = body else {
            return Err(GatewayError::Unavailable(format!(
                "expected a JSON array from {endpoint}"
            )));
        };

        let mut events = Vec::with_capacity(records.len());
        for record in &records {
            match wire::event_from_record(record) {
                Some(event) => events.push(event),
                None => tracing::warn!(%endpoint, "skipping unrecognizable event record"),
            }
        }

        tracing::debug!(%endpoint, count = events.len(), "listed events");
        Ok(events)
    }

    /// Creates an event on one candidate endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unavailable`] unless the response carries an
    /// assigned identifier, and [`GatewayError::AuthExpired`] on HTTP 401.
    pub async fn create(
        &self,
        endpoint: &Endpoint,
        draft: &EventDraft,
    ) -> Result<Event, GatewayError> {
        let url = self.full_url(endpoint);
        let payload = wire::draft_to_record(draft);
        let resp = self
            .http
            .execute(
                self.http
                    .build_request(Method::POST, &url)
                    .await
                    .json(&payload),
            )
            .await?;

        let body: Value = resp
            .json()
            .await
            .map_err(|e| GatewayError::Unavailable(format!("malformed body: {e}")))?;

        wire::created_event(draft, &body).ok_or_else(|| {
            GatewayError::Unavailable(format!("no identifier assigned by {endpoint}"))
        })
    }

    /// Updates an event in place. Any accepted status is success.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unavailable`] on transport failure or a
    /// non-success status, and [`GatewayError::AuthExpired`] on HTTP 401.
    pub async fn update(&self, endpoint: &Endpoint, event: &Event) -> Result<(), GatewayError> {
        let url = self.full_url(endpoint);
        let payload = wire::event_to_record(event);
        self.http
            .execute(
                self.http
                    .build_request(Method::PUT, &url)
                    .await
                    .json(&payload),
            )
            .await?;

        tracing::debug!(%endpoint, "updated event");
        Ok(())
    }

    /// Deletes the event the endpoint points at. Any accepted status is
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Unavailable`] on transport failure or a
    /// non-success status, and [`GatewayError::AuthExpired`] on HTTP 401.
    pub async fn delete(&self, endpoint: &Endpoint) -> Result<(), GatewayError> {
        let url = self.full_url(endpoint);
        self.http
            .execute(self.http.build_request(Method::DELETE, &url).await)
            .await?;

        tracing::debug!(%endpoint, "deleted event");
        Ok(())
    }

    /// Builds the full URL for a resolved endpoint.
    fn full_url(&self, endpoint: &Endpoint) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.as_str()
        )
    }
}
