//! HTTP client implementation for the Battle.net Profile API.

use chrono::Duration;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

use crate::api::{EncountersService, EquipmentService, ProfileService};
use crate::auth::{Credentials, Session};
use crate::models::{CharacterName, RealmSlug, Region};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the Battle.net Profile API.
///
/// The client manages authentication, request building, retries, and
/// response parsing, and hands out service structs per API area.
///
/// # Example
///
/// ```no_run
/// use battlenet_rs::{BlizzardClient, Credentials, Region};
///
/// # async fn example() -> battlenet_rs::Result<()> {
/// let client = BlizzardClient::authenticate(
///     Credentials::from_env()?,
///     Region::Eu,
/// ).await?;
///
/// let summary = client.profile()
///     .summary(&"argent-dawn".into(), &"thrall".into())
///     .await?;
/// println!("{} is level {}", summary.name, summary.level);
/// # Ok(())
/// # }
/// ```
pub struct BlizzardClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
    pub(crate) region: Region,
}

impl BlizzardClient {
    /// Authenticate with client credentials and create a client with the
    /// default configuration.
    pub async fn authenticate(credentials: Credentials, region: Region) -> Result<Self> {
        Self::authenticate_with_config(credentials, region, ClientConfig::default()).await
    }

    /// Authenticate with client credentials and a custom configuration.
    pub async fn authenticate_with_config(
        credentials: Credentials,
        region: Region,
        config: ClientConfig,
    ) -> Result<Self> {
        let session = Session::authenticate(credentials, region).await?;
        Self::with_session(session, region, config)
    }

    /// Create a client from an existing session.
    pub fn with_session(session: Session, region: Region, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
                region,
            }),
        })
    }

    /// Get the character profile service.
    pub fn profile(&self) -> ProfileService {
        ProfileService::new(self.inner.clone())
    }

    /// Get the raid encounters service.
    pub fn encounters(&self) -> EncountersService {
        EncountersService::new(self.inner.clone())
    }

    /// Get the equipment service.
    pub fn equipment(&self) -> EquipmentService {
        EquipmentService::new(self.inner.clone())
    }

    /// Manually refresh the access token.
    pub async fn refresh_token(&self) -> Result<()> {
        self.inner.session.refresh().await
    }

    /// Get the region this client talks to.
    pub fn region(&self) -> Region {
        self.inner.region
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }
}

impl ClientInner {
    /// Build the URL path prefix for a character.
    pub(crate) fn character_path(realm: &RealmSlug, name: &CharacterName) -> String {
        format!("/profile/wow/character/{}/{}", realm, name)
    }

    /// Build a full request URL with the namespace and locale parameters
    /// every profile endpoint requires.
    fn build_url(&self, path: &str) -> Result<Url> {
        let base = format!("{}{}", self.region.api_base_url(), path);
        let url = Url::parse_with_params(
            &base,
            &[
                ("namespace", self.region.profile_namespace()),
                ("locale", self.config.locale.as_str()),
            ],
        )?;
        Ok(url)
    }

    /// Ensure the token is valid before making a request.
    async fn ensure_token_valid(&self) -> Result<()> {
        if self.config.auto_refresh_token {
            let buffer = Duration::seconds(self.config.refresh_buffer_secs);
            if self.session.expires_within(buffer).await {
                self.session.refresh().await?;
            }
        }
        Ok(())
    }

    /// Make a GET request, retrying transient failures per the retry
    /// configuration.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.ensure_token_valid().await?;
        let url = self.build_url(path)?;

        let mut attempt: u32 = 0;
        loop {
            let token = self.session.access_token().await;
            let result = self
                .http
                .get(url.clone())
                .bearer_auth(token.expose_secret())
                .send()
                .await;

            let response = match result {
                Ok(response) => response,
                Err(e) => {
                    if attempt < self.config.retry.max_retries
                        && (e.is_timeout() || e.is_connect())
                    {
                        let delay = self.config.retry.backoff_for_attempt(attempt);
                        tracing::warn!(attempt, error = %e, "Transport error, retrying in {:?}", delay);
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            };

            let status = response.status();
            if status.is_success() {
                return Ok(response.json().await?);
            }

            let status_code = status.as_u16();
            if self.config.retry.should_retry_status(status_code)
                && attempt < self.config.retry.max_retries
            {
                let delay = self.config.retry.backoff_for_attempt(attempt);
                tracing::warn!(status = status_code, attempt, "Retrying in {:?}", delay);
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            return Err(Self::error_for(status, response).await);
        }
    }

    /// Map a failed response to the error taxonomy.
    async fn error_for(status: StatusCode, response: reqwest::Response) -> Error {
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let body: serde_json::Value = response.json().await.unwrap_or_default();

        match status.as_u16() {
            401 => Error::TokenExpired,
            404 => {
                let detail = body
                    .get("detail")
                    .and_then(|d| d.as_str())
                    .unwrap_or("Resource not found")
                    .to_string();
                Error::NotFound(detail)
            }
            429 => Error::RateLimited {
                retry_after_secs: retry_after.unwrap_or(60),
            },
            code => Error::from_api_response(code, body),
        }
    }
}

impl Clone for BlizzardClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for BlizzardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlizzardClient")
            .field("region", &self.inner.region)
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_path() {
        let path = ClientInner::character_path(&"Argent Dawn".into(), &"Thrall".into());
        assert_eq!(path, "/profile/wow/character/argent-dawn/thrall");
    }
}
