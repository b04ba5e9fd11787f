//! OAuth access token management
//!
//! [`TokenManager`] owns the only copy of the bearer token. The whole
//! check-refresh-store sequence runs under one async mutex, so concurrent
//! callers wait for a single in-flight exchange instead of starting their own.

use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use serde_json::Value;
use tokio::sync::Mutex;

use super::transport::{Headers, Method, Transport};
use super::{DEFAULT_TIMEOUT, OAUTH_URL};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

/// Credentials used to mint access tokens
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    api_key: String,
    scope: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        api_key: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_key: api_key.into(),
            scope: scope.into(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// `Basic base64(client_id:client_secret)`
    pub fn basic_authorization(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", general_purpose::STANDARD.encode(raw))
    }

    /// Form body of the password-grant exchange
    fn grant_form(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", "password")
            .append_pair("scope", &self.scope)
            .append_pair("username", &self.api_key)
            .append_pair("password", &self.api_key)
            .finish()
    }
}

impl From<&ClientConfig> for Credentials {
    fn from(config: &ClientConfig) -> Self {
        Self::new(
            config.client_id.clone(),
            config.client_secret.clone(),
            config.api_key.clone(),
            config.scope.clone(),
        )
    }
}

// Secrets stay out of debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

/// Bearer token with its absolute expiry
#[derive(Debug, Clone, PartialEq)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// A token expiring exactly at `now` is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Caches the access token and refreshes it on demand
pub struct TokenManager {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
    cached: Mutex<Option<AccessToken>>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
            cached: Mutex::new(None),
        }
    }

    /// Return a valid token, exchanging credentials first if none is cached
    /// or the cached one has expired.
    pub async fn get_access_token(&self) -> Result<AccessToken> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if !token.is_expired_at(Utc::now()) {
                return Ok(token.clone());
            }
            debug!("Access token expired at {}, refreshing", token.expires_at);
        }

        let fresh = self.exchange().await?;
        *cached = Some(fresh.clone());
        Ok(fresh)
    }

    /// Run the password-grant exchange against the OAuth endpoint
    async fn exchange(&self) -> Result<AccessToken> {
        let mut headers = Headers::new();
        headers.insert(
            "Authorization".to_string(),
            self.credentials.basic_authorization(),
        );
        headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );

        debug!("Requesting access token (scope: {})", self.credentials.scope());
        let response = self
            .transport
            .send(
                OAUTH_URL,
                Method::Post,
                &self.credentials.grant_form(),
                &headers,
                DEFAULT_TIMEOUT,
            )
            .await?;

        let empty = Value::Null;
        let data = if response.body.is_empty() {
            &empty
        } else {
            response.json()?
        };

        let token = data
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::Authentication {
                status: 401,
                body: response.body.to_text(),
            })?;

        let expires_in = data.get("expires_in").map(seconds).unwrap_or(0);
        let expires_at = expiry_after(Utc::now(), expires_in);
        debug!("Access token obtained, expires at {}", expires_at);

        Ok(AccessToken {
            token: token.to_string(),
            expires_at,
        })
    }

    #[cfg(test)]
    pub(crate) async fn set_token(&self, token: AccessToken) {
        *self.cached.lock().await = Some(token);
    }

    #[cfg(test)]
    pub(crate) async fn cached_token(&self) -> Option<AccessToken> {
        self.cached.lock().await.clone()
    }
}

/// `now + expires_in`, saturating at the latest representable instant.
fn expiry_after(now: DateTime<Utc>, expires_in: i64) -> DateTime<Utc> {
    TimeDelta::try_seconds(expires_in)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// `expires_in` may arrive as a number or a numeric string; anything else
/// counts as zero.
fn seconds(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0)
            .max(0),
        Value::String(s) => s.trim().parse::<i64>().unwrap_or(0).max(0),
        _ => 0,
    }
}
