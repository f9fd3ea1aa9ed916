//! Character profile summary models.

use serde::{Deserialize, Serialize};

use super::enums::TypeName;
use super::primitives::RealmSlug;

/// Character profile summary.
///
/// Returned by `/profile/wow/character/{realm}/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSummary {
    /// Character ID
    pub id: u64,
    /// Display name with original casing
    pub name: String,
    /// Character level
    pub level: u32,
    /// Faction (Alliance/Horde)
    #[serde(default)]
    pub faction: Option<TypeName>,
    /// Gender
    #[serde(default)]
    pub gender: Option<TypeName>,
    /// Playable race
    #[serde(default)]
    pub race: Option<NamedRef>,
    /// Playable class
    #[serde(default)]
    pub character_class: Option<NamedRef>,
    /// Active specialization
    #[serde(default)]
    pub active_spec: Option<NamedRef>,
    /// Home realm
    pub realm: RealmRef,
    /// Guild membership, if any
    #[serde(default)]
    pub guild: Option<GuildRef>,
    /// Achievement points
    #[serde(default)]
    pub achievement_points: Option<u32>,
    /// Average item level across owned gear
    #[serde(default)]
    pub average_item_level: Option<u32>,
    /// Item level of currently equipped gear
    #[serde(default)]
    pub equipped_item_level: Option<u32>,
    /// Last login, milliseconds since the Unix epoch
    #[serde(default)]
    pub last_login_timestamp: Option<i64>,
}

impl CharacterSummary {
    /// Class display name, if the API returned one.
    pub fn class_name(&self) -> Option<&str> {
        self.character_class.as_ref().map(|c| c.name.as_str())
    }
}

/// Reference to a named game entity (race, class, spec).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedRef {
    /// Entity ID
    pub id: u64,
    /// Localized display name
    pub name: String,
}

/// Reference to a realm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealmRef {
    /// Realm ID
    pub id: u64,
    /// Localized display name
    pub name: String,
    /// URL slug
    pub slug: RealmSlug,
}

/// Reference to a guild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildRef {
    /// Guild ID
    pub id: u64,
    /// Guild name
    pub name: String,
    /// Realm the guild lives on
    pub realm: RealmRef,
}
