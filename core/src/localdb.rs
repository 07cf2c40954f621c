// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Durable key-value store backing the event cache and the credential store.

use std::error::Error;
use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,
}

impl LocalDb {
    /// Opens a sqlite-backed store.
    /// If `filename` is `None`, it opens an in-memory store.
    pub async fn open(filename: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let options = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite store");
            SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true)
        } else {
            tracing::info!("connecting to in-memory SQLite store");
            SqliteConnectOptions::new().in_memory(true)
        };

        // One connection keeps an in-memory store alive across calls and
        // makes each statement atomic with respect to the others.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| format!("Failed to connect to SQLite store: {e}"))?;

        tracing::debug!("ensuring store table");
        sqlx::query("CREATE TABLE IF NOT EXISTS store (key TEXT PRIMARY KEY, value TEXT NOT NULL);")
            .execute(&pool)
            .await
            .map_err(|e| format!("Failed to ensure store table: {e}"))?;

        Ok(Self { pool })
    }

    /// Reads the value under `key`, if any.
    pub async fn get(&self, key: &str) -> Result<Option<String>, sqlx::Error> {
        const SQL: &str = "SELECT value FROM store WHERE key = ?;";

        let row: Option<(String,)> = sqlx::query_as(SQL)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|(value,)| value))
    }

    /// Atomically replaces the value under `key`.
    ///
    /// A failed write leaves the previously stored value intact.
    pub async fn put(&self, key: &str, value: &str) -> Result<(), sqlx::Error> {
        const SQL: &str = "\
INSERT INTO store (key, value)
VALUES (?, ?)
ON CONFLICT(key) DO UPDATE SET value = excluded.value;
";

        sqlx::query(SQL)
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn close(self) {
        tracing::debug!("closing store connection");
        self.pool.close().await;
    }
}
