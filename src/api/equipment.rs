//! Character equipment service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{CharacterEquipment, CharacterName, RealmSlug};
use crate::Result;

/// Service for a character's equipped items.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: battlenet_rs::BlizzardClient) -> battlenet_rs::Result<()> {
/// let equipment = client.equipment()
///     .get(&"argent-dawn".into(), &"thrall".into())
///     .await?;
/// println!("{} items equipped", equipment.equipped_items.len());
/// # Ok(())
/// # }
/// ```
pub struct EquipmentService {
    inner: Arc<ClientInner>,
}

impl EquipmentService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the currently equipped items for a character.
    pub async fn get(
        &self,
        realm: &RealmSlug,
        name: &CharacterName,
    ) -> Result<CharacterEquipment> {
        let path = format!("{}/equipment", ClientInner::character_path(realm, name));
        self.inner.get(&path).await
    }
}
