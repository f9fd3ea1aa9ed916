//! Session management for Battle.net API authentication.

use chrono::{DateTime, Duration, Utc};
use secrecy::SecretString;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Region;
use crate::{Credentials, Error, Result};

/// Authentication session for the Battle.net API.
///
/// The session holds an access token obtained through the OAuth2
/// client-credentials grant and refreshes it when it nears expiry. Access
/// tokens are valid for roughly 24 hours.
///
/// # Thread Safety
///
/// `Session` is designed to be shared across multiple tasks. It uses
/// internal locking to safely manage token refresh.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
}

struct SessionInner {
    region: Region,
    credentials: Credentials,
    access_token: SecretString,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session by performing an initial client-credentials token
    /// grant.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use battlenet_rs::{Credentials, Region, Session};
    ///
    /// # async fn example() -> battlenet_rs::Result<()> {
    /// let creds = Credentials::from_env()?;
    /// let session = Session::authenticate(creds, Region::Eu).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn authenticate(credentials: Credentials, region: Region) -> Result<Self> {
        let token = Self::fetch_token(&credentials, region).await?;

        Ok(Self {
            inner: Arc::new(RwLock::new(SessionInner {
                region,
                credentials,
                access_token: SecretString::from(token.access_token),
                expires_at: token.expires_at,
            })),
        })
    }

    /// Check if the access token has expired.
    pub async fn is_expired(&self) -> bool {
        let inner = self.inner.read().await;
        Utc::now() >= inner.expires_at
    }

    /// Check if the token will expire within the given buffer period.
    pub async fn expires_within(&self, buffer: Duration) -> bool {
        let inner = self.inner.read().await;
        Utc::now() + buffer >= inner.expires_at
    }

    /// Get the token expiration time.
    pub async fn expires_at(&self) -> DateTime<Utc> {
        self.inner.read().await.expires_at
    }

    /// Fetch a fresh access token using the stored credentials.
    pub async fn refresh(&self) -> Result<()> {
        let mut inner = self.inner.write().await;
        let token = Self::fetch_token(&inner.credentials, inner.region).await?;
        inner.access_token = SecretString::from(token.access_token);
        inner.expires_at = token.expires_at;
        Ok(())
    }

    /// Ensure the session is valid, refreshing if the token expires within
    /// the next 60 seconds.
    pub async fn ensure_valid(&self) -> Result<()> {
        if self.expires_within(Duration::seconds(60)).await {
            self.refresh().await?;
        }
        Ok(())
    }

    /// Get the region this session was created for.
    pub async fn region(&self) -> Region {
        self.inner.read().await.region
    }

    /// Get the current access token.
    ///
    /// This method does not check if the token is expired. Use
    /// [`ensure_valid`](Self::ensure_valid) first.
    pub(crate) async fn access_token(&self) -> SecretString {
        self.inner.read().await.access_token.clone()
    }

    async fn fetch_token(credentials: &Credentials, region: Region) -> Result<TokenResponse> {
        let client = reqwest::Client::new();

        let response = client
            .post(region.token_url())
            .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "Token grant failed ({}): {:?}",
                status, body
            )));
        }

        let mut token: TokenResponse = response.json().await?;
        token.expires_at = Utc::now() + Duration::seconds(token.expires_in);
        Ok(token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("region", &"...")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &"...")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    token_type: String,
    expires_in: i64,
    #[serde(skip)]
    expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_parsing() {
        let json = serde_json::json!({
            "access_token": "EUxxxxxxxxxxxx",
            "token_type": "bearer",
            "expires_in": 86399,
            "sub": "my-client-id"
        });

        let token: TokenResponse = serde_json::from_value(json).unwrap();
        assert_eq!(token.access_token, "EUxxxxxxxxxxxx");
        assert_eq!(token.expires_in, 86399);
    }

    #[test]
    fn test_session_debug_redacts_token() {
        // Ensure we don't leak tokens in debug output
        let debug_str = format!("{:?}", Session {
            inner: Arc::new(RwLock::new(SessionInner {
                region: Region::Eu,
                credentials: Credentials::new("id", "secret"),
                access_token: SecretString::from("super-secret-token".to_string()),
                expires_at: Utc::now(),
            })),
        });

        assert!(!debug_str.contains("super-secret-token"));
        assert!(debug_str.contains("REDACTED"));
    }
}
