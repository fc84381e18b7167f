//! OAuth2 client-credentials token acquisition and caching

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::error::{DirectoryError, DirectoryResult};
use groupctl_config::GraphConfig;

/// Token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// An acquired access token with its expiry
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Check if the token is expired (with 5 minute buffer)
    pub fn is_expired(&self) -> bool {
        let buffer = Duration::minutes(5);
        self.expires_at < Utc::now() + buffer
    }

    /// Check if the token is valid (not expired)
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }
}

/// Acquires app-only Graph tokens via the client-credentials flow and
/// caches them until close to expiry.
pub struct TokenProvider {
    http_client: reqwest::Client,
    token_url: String,
    scope: String,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenProvider {
    pub fn new(config: &GraphConfig, http_client: reqwest::Client) -> Self {
        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            config.login_base_url.trim_end_matches('/'),
            config.tenant_id
        );
        // The .default scope follows the Graph endpoint, so sovereign cloud
        // overrides keep working.
        let scope = format!("{}/.default", config.graph_base_url.trim_end_matches('/'));
        Self {
            http_client,
            token_url,
            scope,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            cached: Mutex::new(None),
        }
    }

    /// Get a bearer token, refreshing the cached one when near expiry
    pub async fn bearer_token(&self) -> DirectoryResult<String> {
        let mut guard = self.cached.lock().await;
        if let Some(token) = guard.as_ref() {
            if token.is_valid() {
                return Ok(token.token.clone());
            }
            tracing::debug!("Cached access token near expiry, refreshing");
        }

        let fresh = self.request_token().await?;
        let value = fresh.token.clone();
        *guard = Some(fresh);
        Ok(value)
    }

    async fn request_token(&self) -> DirectoryResult<AccessToken> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("scope", self.scope.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| DirectoryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            return Err(DirectoryError::auth(format!(
                "Token request failed ({}): {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::invalid(e.to_string()))?;

        Ok(AccessToken {
            token: token.access_token,
            expires_at: Utc::now() + Duration::seconds(token.expires_in),
        })
    }
}
