//! Character equipment models.

use serde::{Deserialize, Serialize};

use super::character::NamedRef;
use super::enums::{EnchantmentSlotType, Quality, SlotRef, SlotType};

/// Equipped items for a character.
///
/// Returned by `/profile/wow/character/{realm}/{name}/equipment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterEquipment {
    /// All currently equipped items
    #[serde(default)]
    pub equipped_items: Vec<EquippedItem>,
}

impl CharacterEquipment {
    /// Get the item equipped in a given slot, if any.
    pub fn item_in_slot(&self, slot: SlotType) -> Option<&EquippedItem> {
        self.equipped_items.iter().find(|i| i.slot.kind == slot)
    }
}

/// A single equipped item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquippedItem {
    /// The item
    pub item: ItemRef,
    /// Which slot it occupies
    pub slot: SlotRef,
    /// Item display name
    pub name: String,
    /// Quality tier
    #[serde(default)]
    pub quality: Option<QualityRef>,
    /// Item level
    #[serde(default)]
    pub level: Option<ItemLevel>,
    /// Enchants and similar effects on the item
    #[serde(default)]
    pub enchantments: Vec<ItemEnchantment>,
    /// Gem sockets on the item
    #[serde(default)]
    pub sockets: Vec<ItemSocket>,
}

impl EquippedItem {
    /// Whether the item carries a permanent enchant.
    ///
    /// Temporary buffs and on-use effects in the enchantments array do not
    /// count.
    pub fn has_permanent_enchant(&self) -> bool {
        self.enchantments.iter().any(|e| {
            e.enchantment_slot
                .as_ref()
                .map(|s| s.kind == EnchantmentSlotType::Permanent)
                // Older payloads omit the slot block; treat those as permanent
                .unwrap_or(true)
        })
    }

    /// Whether every socket on the item holds a gem.
    ///
    /// Items without sockets vacuously return `true`; use
    /// [`sockets`](Self::sockets) to distinguish "no sockets" from "gemmed".
    pub fn all_sockets_filled(&self) -> bool {
        self.sockets.iter().all(|s| s.item.is_some())
    }
}

/// Reference to an item by ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRef {
    /// Item ID
    pub id: u64,
}

/// Item level wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemLevel {
    /// The item level value
    pub value: u32,
    /// Localized display string
    #[serde(default)]
    pub display_string: Option<String>,
}

/// Quality wrapper (`type` + localized name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityRef {
    /// Quality tier
    #[serde(rename = "type")]
    pub kind: Quality,
    /// Localized display name
    pub name: String,
}

/// An enchantment entry on an equipped item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemEnchantment {
    /// Localized display string (e.g. "Enchanted: +545 Critical Strike")
    #[serde(default)]
    pub display_string: Option<String>,
    /// Enchantment ID
    #[serde(default)]
    pub enchantment_id: Option<u64>,
    /// Which enchantment slot this occupies
    #[serde(default)]
    pub enchantment_slot: Option<EnchantmentSlotRef>,
}

/// Wire pair for an enchantment slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnchantmentSlotRef {
    /// Slot index
    pub id: i32,
    /// Slot category
    #[serde(rename = "type")]
    pub kind: EnchantmentSlotType,
}

/// A gem socket on an equipped item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSocket {
    /// Socket type (e.g. PRISMATIC)
    #[serde(default)]
    pub socket_type: Option<SocketTypeRef>,
    /// The socketed gem, absent when the socket is empty
    #[serde(default)]
    pub item: Option<NamedRef>,
    /// Localized display string for the gem's effect
    #[serde(default)]
    pub display_string: Option<String>,
}

/// Wire pair for a socket type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocketTypeRef {
    /// Stable socket identifier
    #[serde(rename = "type")]
    pub kind: String,
    /// Localized display name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CharacterEquipment {
        serde_json::from_value(serde_json::json!({
            "equipped_items": [
                {
                    "item": { "id": 212081 },
                    "slot": { "type": "CHEST", "name": "Chest" },
                    "name": "Exquisite Weaver's Tunic",
                    "quality": { "type": "EPIC", "name": "Epic" },
                    "level": { "value": 626, "display_string": "Item Level 626" },
                    "enchantments": [
                        {
                            "display_string": "Enchanted: Crystalline Radiance",
                            "enchantment_id": 7364,
                            "enchantment_slot": { "id": 0, "type": "PERMANENT" }
                        }
                    ]
                },
                {
                    "item": { "id": 221077 },
                    "slot": { "type": "MAIN_HAND", "name": "Main Hand" },
                    "name": "Remnant of Darkness",
                    "enchantments": [
                        {
                            "display_string": "Algari Mana Oil",
                            "enchantment_slot": { "id": 1, "type": "TEMPORARY" }
                        }
                    ]
                },
                {
                    "item": { "id": 215133 },
                    "slot": { "type": "FINGER_1", "name": "Ring 1" },
                    "name": "Band of the Shattered Soul",
                    "sockets": [
                        {
                            "socket_type": { "type": "PRISMATIC", "name": "Prismatic Socket" },
                            "item": { "id": 213743, "name": "Culminating Blasphemite" },
                            "display_string": "+181 Critical Strike"
                        },
                        {
                            "socket_type": { "type": "PRISMATIC", "name": "Prismatic Socket" }
                        }
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_item_in_slot() {
        let equipment = sample();
        let chest = equipment.item_in_slot(SlotType::Chest).unwrap();
        assert_eq!(chest.name, "Exquisite Weaver's Tunic");
        assert!(equipment.item_in_slot(SlotType::OffHand).is_none());
    }

    #[test]
    fn test_permanent_enchant_detection() {
        let equipment = sample();
        assert!(equipment
            .item_in_slot(SlotType::Chest)
            .unwrap()
            .has_permanent_enchant());

        // Oil is TEMPORARY, not a real enchant
        assert!(!equipment
            .item_in_slot(SlotType::MainHand)
            .unwrap()
            .has_permanent_enchant());
    }

    #[test]
    fn test_socket_fill_state() {
        let equipment = sample();
        let ring = equipment.item_in_slot(SlotType::Finger1).unwrap();
        assert_eq!(ring.sockets.len(), 2);
        assert!(!ring.all_sockets_filled());

        // An item without sockets is vacuously "filled"
        let chest = equipment.item_in_slot(SlotType::Chest).unwrap();
        assert!(chest.all_sockets_filled());
    }
}
