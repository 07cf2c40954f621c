// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Synchronization facade over the remote gateway and the durable cache.

use std::error::Error;
use std::sync::Arc;

use rota_gateway::{
    Endpoint, EndpointResolver, Event, EventDraft, EventGateway, GatewayConfig, GatewayError,
    Operation,
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::cache::EventCache;
use crate::config::Config;
use crate::localdb::LocalDb;
use crate::seed::seed_events;
use crate::token::TokenStore;

/// Where a listing came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Fresh from the backend; the cache was updated with it.
    Remote,

    /// The last durably cached list; the backend was unreachable.
    Cache,

    /// Built-in placeholder data; no backend and no cached list.
    Seed,
}

/// An event listing together with its provenance.
#[derive(Debug, Clone)]
pub struct Listing {
    /// The events, in server (or cache) order.
    pub events: Vec<Event>,

    /// Where the events came from.
    pub source: ListSource,
}

/// The rota synchronization facade.
///
/// Every operation degrades instead of failing when the backend is
/// unreachable: listings fall back to the cache (and then to seed data),
/// writes are applied to the cache unconditionally so the local copy stays
/// authoritative until the next successful sync.
#[derive(Debug)]
pub struct Rota {
    gateway: EventGateway,
    resolver: EndpointResolver,
    cache: EventCache,
    tokens: TokenStore,
    db: LocalDb,

    // Serializes read-modify-write rounds on the cached list.
    write_lock: Mutex<()>,
}

impl Rota {
    /// Creates a new facade from the given configuration.
    ///
    /// Opens (creating if necessary) the durable store under the configured
    /// state directory, or an in-memory store when none is available.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the state directory
    /// cannot be created, or the store cannot be opened.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let db = match &config.state_dir {
            Some(dir) => {
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|e| format!("Failed to create state directory: {e}"))?;
                LocalDb::open(Some(&dir.join("rota.db"))).await?
            }
            None => LocalDb::open(None).await?,
        };

        let cache = EventCache::new(db.clone());
        let tokens = TokenStore::new(db.clone());
        let gateway = EventGateway::new(
            GatewayConfig {
                base_url: config.base_url.clone(),
                timeout_secs: config.timeout_secs,
                ..Default::default()
            },
            Arc::new(tokens.clone()),
        )?;
        let resolver = EndpointResolver::new(config.resources.clone());

        Ok(Self {
            gateway,
            resolver,
            cache,
            tokens,
            db,
            write_lock: Mutex::new(()),
        })
    }

    /// Fetches the current event list.
    ///
    /// Tries each candidate endpoint in priority order and returns the first
    /// successful listing, writing it through to the cache. An expired
    /// credential stops the probe early since every candidate shares it.
    /// When no candidate succeeds the cached list is served, and a fresh
    /// install with an empty cache gets the seed dataset.
    pub async fn list_events(&self) -> Listing {
        for endpoint in self.resolver.candidates(Operation::List, None) {
            match self.gateway.list(&endpoint).await {
                Ok(events) => {
                    {
                        let _guard = self.write_lock.lock().await;
                        if let Err(err) = self.cache.write_all(&events).await {
                            tracing::warn!(%err, "failed to cache remote listing");
                        }
                    }
                    tracing::info!(%endpoint, count = events.len(), "listed events from backend");
                    return Listing {
                        events,
                        source: ListSource::Remote,
                    };
                }
                Err(GatewayError::AuthExpired) => {
                    tracing::warn!(%endpoint, "credential expired; not probing further");
                    break;
                }
                Err(err) => {
                    tracing::debug!(%endpoint, %err, "candidate endpoint unavailable");
                }
            }
        }

        let events = self.cache.read_all().await;
        if events.is_empty() {
            tracing::info!("no backend and no cached events; serving seed data");
            Listing {
                events: seed_events(),
                source: ListSource::Seed,
            }
        } else {
            tracing::info!(count = events.len(), "serving cached events");
            Listing {
                events,
                source: ListSource::Cache,
            }
        }
    }

    /// Creates an event.
    ///
    /// Tries each candidate endpoint in priority order; the first one that
    /// assigns an identifier wins. When none does, the appointment is
    /// accepted offline under a synthesized `local-` identifier. Either way
    /// the result is written to the cache before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if the draft's time range is invalid.
    pub async fn create_event(&self, draft: EventDraft) -> Result<Event, Box<dyn Error>> {
        draft.validate()?;

        for endpoint in self.resolver.candidates(Operation::Create, None) {
            match self.gateway.create(&endpoint, &draft).await {
                Ok(event) => {
                    tracing::info!(%endpoint, id = %event.id, "created event on backend");
                    self.remember(event.clone()).await;
                    return Ok(event);
                }
                Err(GatewayError::AuthExpired) => {
                    tracing::warn!(%endpoint, "credential expired; not probing further");
                    break;
                }
                Err(err) => {
                    tracing::debug!(%endpoint, %err, "candidate endpoint unavailable");
                }
            }
        }

        let event = draft.into_event(local_event_id());
        tracing::info!(id = %event.id, "backend unreachable; created event locally");
        self.remember(event.clone()).await;
        Ok(event)
    }

    /// Updates an event.
    ///
    /// One attempt against the primary endpoint; a failure is logged and the
    /// local copy stays authoritative until the next successful sync.
    ///
    /// # Errors
    ///
    /// Returns an error only if the event's time range is invalid.
    pub async fn update_event(&self, event: Event) -> Result<Event, Box<dyn Error>> {
        event.validate()?;

        if let Some(endpoint) = self.primary(Operation::Update, &event.id) {
            match self.gateway.update(&endpoint, &event).await {
                Ok(()) => tracing::info!(%endpoint, id = %event.id, "updated event on backend"),
                Err(err) => {
                    tracing::warn!(%endpoint, id = %event.id, %err, "backend update failed; keeping local copy");
                }
            }
        }

        self.remember(event.clone()).await;
        Ok(event)
    }

    /// Deletes an event by id. Idempotent: deleting an unknown id succeeds.
    ///
    /// One attempt against the primary endpoint; a failure is logged and the
    /// event is removed from the cache regardless.
    ///
    /// # Errors
    ///
    /// Currently infallible; the `Result` keeps the surface uniform with the
    /// other write operations.
    pub async fn delete_event(&self, id: &str) -> Result<(), Box<dyn Error>> {
        if let Some(endpoint) = self.primary(Operation::Delete, id) {
            match self.gateway.delete(&endpoint).await {
                Ok(()) => tracing::info!(%endpoint, id, "deleted event on backend"),
                Err(err) => {
                    tracing::warn!(%endpoint, id, %err, "backend delete failed; removing locally");
                }
            }
        }

        let _guard = self.write_lock.lock().await;
        let mut events = self.cache.read_all().await;
        events.retain(|e| e.id != id);
        if let Err(err) = self.cache.write_all(&events).await {
            tracing::warn!(%err, "failed to persist event removal");
        }
        Ok(())
    }

    /// Persists the credential obtained from the login flow.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential cannot be written to the store.
    pub async fn save_auth_token(&self, token: &str) -> Result<(), Box<dyn Error>> {
        self.tokens.save_auth_token(token).await
    }

    /// Closes the underlying store.
    pub async fn close(self) {
        self.db.close().await;
    }

    /// The highest-priority candidate for an item operation.
    fn primary(&self, op: Operation, id: &str) -> Option<Endpoint> {
        self.resolver.candidates(op, Some(id)).into_iter().next()
    }

    /// Upserts one event into the cached list.
    async fn remember(&self, event: Event) {
        let _guard = self.write_lock.lock().await;
        let mut events = self.cache.read_all().await;
        match events.iter_mut().find(|e| e.id == event.id) {
            Some(slot) => *slot = event,
            None => events.push(event),
        }
        if let Err(err) = self.cache.write_all(&events).await {
            tracing::warn!(%err, "failed to persist event");
        }
    }
}

/// Synthesizes an identifier for an appointment accepted while offline.
fn local_event_id() -> String {
    format!("local-{}", Uuid::new_v4())
}
