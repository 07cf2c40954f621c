// SPDX-FileCopyrightText: 2026 Rota contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Durable bearer-credential store.

use std::error::Error;

use rota_gateway::TokenProvider;

use crate::localdb::LocalDb;

const TOKEN_KEY: &str = "auth_token";

/// Placeholder credential accepted by demo deployments, used only until a
/// real token is obtained through the login flow.
const FALLBACK_TOKEN: &str = "rota-demo-access";

/// Stores the current bearer credential under a fixed key.
///
/// The login flow writes through [`TokenStore::save_auth_token`]; the gateway
/// reads the store before each request via the [`TokenProvider`] capability.
#[derive(Debug, Clone)]
pub struct TokenStore {
    db: LocalDb,
}

impl TokenStore {
    pub fn new(db: LocalDb) -> Self {
        Self { db }
    }

    /// The current bearer credential, falling back to the built-in
    /// placeholder when none has been saved yet.
    pub async fn get_auth_token(&self) -> String {
        match self.db.get(TOKEN_KEY).await {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => FALLBACK_TOKEN.to_string(),
            Err(err) => {
                tracing::warn!(%err, "failed to read auth token; using fallback");
                FALLBACK_TOKEN.to_string()
            }
        }
    }

    /// Persists the credential obtained from the login flow.
    pub async fn save_auth_token(&self, token: &str) -> Result<(), Box<dyn Error>> {
        self.db
            .put(TOKEN_KEY, token)
            .await
            .map_err(|e| format!("Failed to persist auth token: {e}").into())
    }
}

#[async_trait::async_trait]
impl TokenProvider for TokenStore {
    async fn token(&self) -> String {
        self.get_auth_token().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test_store() -> TokenStore {
        let db = LocalDb::open(None).await.expect("Failed to open test store");
        TokenStore::new(db)
    }

    #[tokio::test]
    async fn unset_token_falls_back_to_the_placeholder() {
        // Arrange
        let store = setup_test_store().await;

        // Act
        let token = store.get_auth_token().await;

        // Assert
        assert_eq!(token, FALLBACK_TOKEN);
    }

    #[tokio::test]
    async fn saved_token_replaces_the_placeholder() {
        // Arrange
        let store = setup_test_store().await;

        // Act
        store
            .save_auth_token("real-token")
            .await
            .expect("Failed to save token");

        // Assert
        assert_eq!(store.get_auth_token().await, "real-token");
    }

    #[tokio::test]
    async fn empty_saved_token_is_treated_as_unset() {
        // Arrange
        let store = setup_test_store().await;
        store.save_auth_token("").await.expect("Failed to save token");

        // Act
        let token = store.get_auth_token().await;

        // Assert
        assert_eq!(token, FALLBACK_TOKEN);
    }
}
