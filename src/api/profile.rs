//! Character profile service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{CharacterName, CharacterSummary, RealmSlug};
use crate::Result;

/// Service for character profile summaries.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: battlenet_rs::BlizzardClient) -> battlenet_rs::Result<()> {
/// let summary = client.profile()
///     .summary(&"argent-dawn".into(), &"thrall".into())
///     .await?;
/// println!("{} ({})", summary.name, summary.class_name().unwrap_or("?"));
/// # Ok(())
/// # }
/// ```
pub struct ProfileService {
    inner: Arc<ClientInner>,
}

impl ProfileService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the profile summary for a character.
    pub async fn summary(
        &self,
        realm: &RealmSlug,
        name: &CharacterName,
    ) -> Result<CharacterSummary> {
        self.inner
            .get(&ClientInner::character_path(realm, name))
            .await
    }
}
