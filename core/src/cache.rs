// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Durable fallback copy of the canonical event list.

use std::error::Error;

use rota_gateway::Event;

use crate::localdb::LocalDb;

const EVENTS_KEY: &str = "events";

/// Write-through backup and fallback source of truth for events.
///
/// The whole list is stored as one JSON record; timestamps are serialized as
/// ISO-8601 text and reconstruct exactly on read.
#[derive(Debug, Clone)]
pub struct EventCache {
    db: LocalDb,
}

impl EventCache {
    pub fn new(db: LocalDb) -> Self {
        Self { db }
    }

    /// Reads the last durably written event list.
    ///
    /// Never fails the caller: a missing or corrupt record degrades to an
    /// empty list with a warning.
    pub async fn read_all(&self) -> Vec<Event> {
        let raw = match self.db.get(EVENTS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(%err, "failed to read event cache; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(%err, "corrupt event cache record; treating as empty");
                Vec::new()
            }
        }
    }

    /// Atomically replaces the durable event list.
    pub async fn write_all(&self, events: &[Event]) -> Result<(), Box<dyn Error>> {
        let raw = serde_json::to_string(events)
            .map_err(|e| format!("Failed to serialize events: {e}"))?;
        self.db
            .put(EVENTS_KEY, &raw)
            .await
            .map_err(|e| format!("Failed to persist events: {e}"))?;

        tracing::debug!(count = events.len(), "persisted event list");
        Ok(())
    }
}
