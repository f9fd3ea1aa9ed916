//! Client credentials loading.

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{Error, Result};

/// API client credentials (id/secret pair) from the Battle.net developer
/// portal.
///
/// The secret is held in a [`SecretString`] and never appears in `Debug`
/// output.
///
/// # Example
///
/// ```no_run
/// use battlenet_rs::Credentials;
///
/// # fn example() -> battlenet_rs::Result<()> {
/// // From a TOML file:
/// //   [client]
/// //   id = "abcdef"
/// //   secret = "hunter2"
/// let creds = Credentials::from_file("client.toml")?;
///
/// // Or from BLIZZARD_CLIENT_ID / BLIZZARD_CLIENT_SECRET:
/// let creds = Credentials::from_env()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Credentials {
    pub(crate) client_id: String,
    pub(crate) client_secret: SecretString,
}

impl Credentials {
    /// Create credentials from raw id and secret strings.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// Load credentials from a TOML file with a `[client]` section.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read credentials file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&contents)
    }

    /// Parse credentials from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: CredentialsFile = toml::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse credentials file: {}", e)))?;
        if file.client.id.is_empty() || file.client.secret.is_empty() {
            return Err(Error::Config(
                "Credentials file has an empty client id or secret".to_string(),
            ));
        }
        Ok(Self::new(file.client.id, file.client.secret))
    }

    /// Load credentials from `BLIZZARD_CLIENT_ID` and
    /// `BLIZZARD_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        let id = std::env::var("BLIZZARD_CLIENT_ID")
            .map_err(|_| Error::Config("BLIZZARD_CLIENT_ID is not set".to_string()))?;
        let secret = std::env::var("BLIZZARD_CLIENT_SECRET")
            .map_err(|_| Error::Config("BLIZZARD_CLIENT_SECRET is not set".to_string()))?;
        Ok(Self::new(id, secret))
    }

    /// The client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Deserialize)]
struct CredentialsFile {
    client: ClientSection,
}

#[derive(Deserialize)]
struct ClientSection {
    id: String,
    secret: String,
}
