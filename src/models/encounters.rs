//! Raid encounters models.
//!
//! The raid-encounters response is a nested tree: expansions, each with
//! raid instances, each with per-difficulty modes carrying kill progress.

use serde::{Deserialize, Serialize};

use super::character::NamedRef;
use super::enums::{Difficulty, DifficultyRef, TypeName};

/// Raid encounters for a character.
///
/// Returned by `/profile/wow/character/{realm}/{name}/encounters/raids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaidEncounters {
    /// Per-expansion raid history
    #[serde(default)]
    pub expansions: Vec<ExpansionRaids>,
}

impl RaidEncounters {
    /// Find the progress block for an expansion/instance/difficulty triple.
    ///
    /// Names are matched case-insensitively against the localized names the
    /// API returned. Returns `None` when the character has no recorded kills
    /// for that combination (which the API expresses by omission).
    pub fn find_mode(
        &self,
        expansion: &str,
        instance: &str,
        difficulty: Difficulty,
    ) -> Option<&RaidMode> {
        self.expansions
            .iter()
            .find(|e| e.expansion.name.eq_ignore_ascii_case(expansion))?
            .instances
            .iter()
            .find(|i| i.instance.name.eq_ignore_ascii_case(instance))?
            .modes
            .iter()
            .find(|m| m.difficulty.kind == difficulty)
    }
}

/// Raids for a single expansion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionRaids {
    /// The expansion
    pub expansion: NamedRef,
    /// Raid instances the character has history in
    #[serde(default)]
    pub instances: Vec<InstanceRaids>,
}

/// A single raid instance with per-difficulty modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceRaids {
    /// The raid instance
    pub instance: NamedRef,
    /// Difficulty modes with recorded progress
    #[serde(default)]
    pub modes: Vec<RaidMode>,
}

/// Kill progress for one difficulty of one raid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaidMode {
    /// Difficulty of this mode
    pub difficulty: DifficultyRef,
    /// Completion status (e.g. "COMPLETE", "IN_PROGRESS")
    #[serde(default)]
    pub status: Option<TypeName>,
    /// Boss-kill progress
    pub progress: RaidProgress,
}

/// Aggregate boss-kill progress for a raid mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaidProgress {
    /// Bosses killed at least once
    pub completed_count: u32,
    /// Total bosses in the raid
    pub total_count: u32,
    /// Per-boss kill records
    #[serde(default)]
    pub encounters: Vec<EncounterKill>,
}

/// Kill record for a single boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterKill {
    /// The boss
    pub encounter: NamedRef,
    /// Lifetime kill count on this difficulty
    #[serde(default)]
    pub completed_count: Option<u32>,
    /// Most recent kill, milliseconds since the Unix epoch
    pub last_kill_timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RaidEncounters {
        serde_json::from_value(serde_json::json!({
            "expansions": [
                {
                    "expansion": { "id": 505, "name": "The War Within" },
                    "instances": [
                        {
                            "instance": { "id": 1273, "name": "Nerub-ar Palace" },
                            "modes": [
                                {
                                    "difficulty": { "type": "NORMAL", "name": "Normal" },
                                    "status": { "type": "COMPLETE", "name": "Complete" },
                                    "progress": {
                                        "completed_count": 8,
                                        "total_count": 8,
                                        "encounters": [
                                            {
                                                "encounter": { "id": 2607, "name": "Ulgrax the Devourer" },
                                                "completed_count": 4,
                                                "last_kill_timestamp": 1726000000000i64
                                            }
                                        ]
                                    }
                                },
                                {
                                    "difficulty": { "type": "HEROIC", "name": "Heroic" },
                                    "progress": {
                                        "completed_count": 3,
                                        "total_count": 8,
                                        "encounters": []
                                    }
                                }
                            ]
                        }
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_find_mode() {
        let raids = sample();

        let mode = raids
            .find_mode("The War Within", "Nerub-ar Palace", Difficulty::Heroic)
            .expect("heroic mode present");
        assert_eq!(mode.progress.completed_count, 3);
        assert_eq!(mode.progress.total_count, 8);
    }

    #[test]
    fn test_find_mode_case_insensitive() {
        let raids = sample();
        assert!(raids
            .find_mode("the war within", "nerub-ar palace", Difficulty::Normal)
            .is_some());
    }

    #[test]
    fn test_find_mode_absent() {
        let raids = sample();
        assert!(raids
            .find_mode("The War Within", "Nerub-ar Palace", Difficulty::Mythic)
            .is_none());
        assert!(raids
            .find_mode("Dragonflight", "Amirdrassil", Difficulty::Normal)
            .is_none());
    }

    #[test]
    fn test_empty_response() {
        let raids: RaidEncounters = serde_json::from_str("{}").unwrap();
        assert!(raids.expansions.is_empty());
    }
}
