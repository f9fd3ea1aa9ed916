//! Raid encounters service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{CharacterName, RaidEncounters, RealmSlug};
use crate::Result;

/// Service for a character's raid encounter history.
///
/// # Example
///
/// ```no_run
/// use battlenet_rs::models::Difficulty;
///
/// # async fn example(client: battlenet_rs::BlizzardClient) -> battlenet_rs::Result<()> {
/// let raids = client.encounters()
///     .raids(&"argent-dawn".into(), &"thrall".into())
///     .await?;
///
/// if let Some(mode) = raids.find_mode("The War Within", "Nerub-ar Palace", Difficulty::Heroic) {
///     println!("{}/{}", mode.progress.completed_count, mode.progress.total_count);
/// }
/// # Ok(())
/// # }
/// ```
pub struct EncountersService {
    inner: Arc<ClientInner>,
}

impl EncountersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the raid encounter history for a character.
    ///
    /// The response only contains expansions, instances and difficulties
    /// the character has recorded kills in.
    pub async fn raids(
        &self,
        realm: &RealmSlug,
        name: &CharacterName,
    ) -> Result<RaidEncounters> {
        let path = format!(
            "{}/encounters/raids",
            ClientInner::character_path(realm, name)
        );
        self.inner.get(&path).await
    }
}
