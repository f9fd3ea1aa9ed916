//! Enumeration types for the Profile API.
//!
//! Blizzard encodes most enumerations on the wire as a `{ "type": ..., "name": ... }`
//! pair where `type` is a stable identifier and `name` is localized. The enums
//! here model the `type` side; [`TypeName`] keeps both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A wire-level `type`/`name` pair.
///
/// Used for fields where the crate has no dedicated enum (faction, class,
/// keystone affixes and similar), keeping the stable identifier alongside
/// the localized display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeName {
    /// Stable identifier (e.g. "ALLIANCE")
    #[serde(rename = "type")]
    pub kind: String,
    /// Localized display name (e.g. "Alliance")
    pub name: String,
}

/// Raid difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Raid Finder
    #[serde(rename = "LFR")]
    Lfr,
    /// Normal
    #[serde(rename = "NORMAL")]
    Normal,
    /// Heroic
    #[serde(rename = "HEROIC")]
    Heroic,
    /// Mythic
    #[serde(rename = "MYTHIC")]
    Mythic,
    /// Unrecognized difficulty
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    /// Parse a difficulty from a human-entered name ("heroic", "LFR", ...).
    pub fn parse(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lfr" | "raid finder" => Ok(Difficulty::Lfr),
            "normal" => Ok(Difficulty::Normal),
            "heroic" => Ok(Difficulty::Heroic),
            "mythic" => Ok(Difficulty::Mythic),
            other => Err(crate::Error::InvalidInput(format!(
                "Unknown difficulty: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Lfr => write!(f, "Raid Finder"),
            Difficulty::Normal => write!(f, "Normal"),
            Difficulty::Heroic => write!(f, "Heroic"),
            Difficulty::Mythic => write!(f, "Mythic"),
            Difficulty::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Wire pair for a raid difficulty (`type` + localized `name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRef {
    /// Stable difficulty identifier
    #[serde(rename = "type")]
    pub kind: Difficulty,
    /// Localized display name
    pub name: String,
}

/// Equipment slot identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotType {
    /// Head
    Head,
    /// Neck
    Neck,
    /// Shoulders
    Shoulder,
    /// Back (cloak)
    Back,
    /// Chest
    Chest,
    /// Shirt
    Shirt,
    /// Tabard
    Tabard,
    /// Wrists
    Wrist,
    /// Hands
    Hands,
    /// Waist (belt)
    Waist,
    /// Legs
    Legs,
    /// Feet (boots)
    Feet,
    /// First ring
    #[serde(rename = "FINGER_1")]
    Finger1,
    /// Second ring
    #[serde(rename = "FINGER_2")]
    Finger2,
    /// First trinket
    #[serde(rename = "TRINKET_1")]
    Trinket1,
    /// Second trinket
    #[serde(rename = "TRINKET_2")]
    Trinket2,
    /// Main hand weapon
    MainHand,
    /// Off hand
    OffHand,
    /// Ranged (classic-era slot)
    Ranged,
    /// Unrecognized slot
    #[serde(other)]
    Unknown,
}

impl fmt::Display for SlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlotType::Head => "Head",
            SlotType::Neck => "Neck",
            SlotType::Shoulder => "Shoulder",
            SlotType::Back => "Back",
            SlotType::Chest => "Chest",
            SlotType::Shirt => "Shirt",
            SlotType::Tabard => "Tabard",
            SlotType::Wrist => "Wrist",
            SlotType::Hands => "Hands",
            SlotType::Waist => "Waist",
            SlotType::Legs => "Legs",
            SlotType::Feet => "Feet",
            SlotType::Finger1 => "Ring 1",
            SlotType::Finger2 => "Ring 2",
            SlotType::Trinket1 => "Trinket 1",
            SlotType::Trinket2 => "Trinket 2",
            SlotType::MainHand => "Main Hand",
            SlotType::OffHand => "Off Hand",
            SlotType::Ranged => "Ranged",
            SlotType::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// Wire pair for an equipment slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRef {
    /// Stable slot identifier
    #[serde(rename = "type")]
    pub kind: SlotType,
    /// Localized display name
    pub name: String,
}

/// Item quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Quality {
    /// Poor (grey)
    Poor,
    /// Common (white)
    Common,
    /// Uncommon (green)
    Uncommon,
    /// Rare (blue)
    Rare,
    /// Epic (purple)
    Epic,
    /// Legendary (orange)
    Legendary,
    /// Artifact
    Artifact,
    /// Heirloom
    Heirloom,
    /// Unrecognized quality
    #[serde(other)]
    Unknown,
}

/// Enchantment slot category on an equipped item.
///
/// Only `PERMANENT` entries represent a real enchant; temporary weapon
/// buffs and on-use effects also appear in the enchantments array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnchantmentSlotType {
    /// Permanent enchant
    Permanent,
    /// Temporary weapon buff (oils, stones)
    Temporary,
    /// Engineering-style on-use effect
    OnUseSpell,
    /// Bonus sockets added to the item
    BonusSockets,
    /// Unrecognized category
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_wire_form() {
        let d: Difficulty = serde_json::from_str("\"HEROIC\"").unwrap();
        assert_eq!(d, Difficulty::Heroic);

        let d: Difficulty = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(d, Difficulty::Unknown);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("heroic").unwrap(), Difficulty::Heroic);
        assert_eq!(Difficulty::parse("LFR").unwrap(), Difficulty::Lfr);
        assert!(Difficulty::parse("ultra").is_err());
    }

    #[test]
    fn test_slot_wire_form() {
        let s: SlotType = serde_json::from_str("\"MAIN_HAND\"").unwrap();
        assert_eq!(s, SlotType::MainHand);

        let s: SlotType = serde_json::from_str("\"FINGER_1\"").unwrap();
        assert_eq!(s, SlotType::Finger1);

        let s: SlotType = serde_json::from_str("\"PROFESSION_TOOL\"").unwrap();
        assert_eq!(s, SlotType::Unknown);
    }

    #[test]
    fn test_enchantment_slot_wire_form() {
        let e: EnchantmentSlotType = serde_json::from_str("\"PERMANENT\"").unwrap();
        assert_eq!(e, EnchantmentSlotType::Permanent);

        let e: EnchantmentSlotType = serde_json::from_str("\"ON_USE_SPELL\"").unwrap();
        assert_eq!(e, EnchantmentSlotType::OnUseSpell);
    }
}
