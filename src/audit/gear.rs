//! Equipment enchant and gem auditing.
//!
//! Compares equipped items against the expected seasonal baseline: which
//! slots should carry a permanent enchant, and which should have a gem
//! socket with a gem in it.

use crate::models::{CharacterEquipment, SlotType};

/// Slots expected to carry a permanent enchant.
pub const EXPECTED_ENCHANT_SLOTS: [SlotType; 8] = [
    SlotType::Back,
    SlotType::Chest,
    SlotType::Wrist,
    SlotType::Legs,
    SlotType::Feet,
    SlotType::Finger1,
    SlotType::Finger2,
    SlotType::MainHand,
];

/// Slots expected to carry a crafted tertiary socket.
pub const TERTIARY_SOCKET_SLOTS: [SlotType; 3] =
    [SlotType::Head, SlotType::Wrist, SlotType::Waist];

/// Slots with a built-in gem setting.
pub const SETTING_SOCKET_SLOTS: [SlotType; 3] =
    [SlotType::Neck, SlotType::Finger1, SlotType::Finger2];

/// What is wrong with a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// No item equipped in a slot that should have one
    EmptySlot,
    /// Item has no permanent enchant
    MissingEnchant,
    /// Item should have a gem socket but has none
    MissingSocket,
    /// Item has a socket with no gem in it
    EmptySocket,
}

impl FindingKind {
    fn describe(self) -> &'static str {
        match self {
            FindingKind::EmptySlot => "no item equipped",
            FindingKind::MissingEnchant => "missing enchant",
            FindingKind::MissingSocket => "missing socket",
            FindingKind::EmptySocket => "empty socket",
        }
    }
}

/// A single audit finding for one slot.
#[derive(Debug, Clone)]
pub struct Finding {
    /// The slot the finding applies to
    pub slot: SlotType,
    /// Name of the equipped item, if any
    pub item: Option<String>,
    /// What is wrong
    pub kind: FindingKind,
}

/// Result of auditing a character's equipment.
#[derive(Debug, Clone)]
pub struct GearAudit {
    /// Everything that failed the baseline, in slot order
    pub findings: Vec<Finding>,
}

impl GearAudit {
    /// Whether the equipment passes the full baseline.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Findings of one kind.
    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    /// Render a chat-friendly report.
    pub fn report(&self) -> String {
        if self.is_clean() {
            return "All expected enchants and gems are in place.".to_string();
        }

        let mut out = String::from("Gear audit:");
        for finding in &self.findings {
            match &finding.item {
                Some(item) => {
                    out.push_str(&format!(
                        "\n- {} ({}): {}",
                        finding.slot,
                        item,
                        finding.kind.describe()
                    ));
                }
                None => {
                    out.push_str(&format!(
                        "\n- {}: {}",
                        finding.slot,
                        finding.kind.describe()
                    ));
                }
            }
        }
        out
    }
}

/// Audit equipped items against the expected enchant and socket baseline.
///
/// An expected slot with nothing equipped is reported as an empty slot
/// rather than passing silently.
pub fn audit_equipment(equipment: &CharacterEquipment) -> GearAudit {
    let mut findings = Vec::new();

    for slot in EXPECTED_ENCHANT_SLOTS {
        match equipment.item_in_slot(slot) {
            None => findings.push(Finding {
                slot,
                item: None,
                kind: FindingKind::EmptySlot,
            }),
            Some(item) => {
                if !item.has_permanent_enchant() {
                    findings.push(Finding {
                        slot,
                        item: Some(item.name.clone()),
                        kind: FindingKind::MissingEnchant,
                    });
                }
            }
        }
    }

    for slot in TERTIARY_SOCKET_SLOTS.into_iter().chain(SETTING_SOCKET_SLOTS) {
        match equipment.item_in_slot(slot) {
            None => {
                // Enchant pass already reported rings/wrists with no item
                if !findings
                    .iter()
                    .any(|f| f.slot == slot && f.kind == FindingKind::EmptySlot)
                {
                    findings.push(Finding {
                        slot,
                        item: None,
                        kind: FindingKind::EmptySlot,
                    });
                }
            }
            Some(item) => {
                if item.sockets.is_empty() {
                    findings.push(Finding {
                        slot,
                        item: Some(item.name.clone()),
                        kind: FindingKind::MissingSocket,
                    });
                } else if !item.all_sockets_filled() {
                    findings.push(Finding {
                        slot,
                        item: Some(item.name.clone()),
                        kind: FindingKind::EmptySocket,
                    });
                }
            }
        }
    }

    GearAudit { findings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(slot: &str, name: &str, enchant: Option<&str>, sockets: serde_json::Value) -> serde_json::Value {
        let mut enchantments = Vec::new();
        if let Some(kind) = enchant {
            enchantments.push(serde_json::json!({
                "display_string": "Enchanted",
                "enchantment_id": 7364,
                "enchantment_slot": { "id": 0, "type": kind }
            }));
        }
        serde_json::json!({
            "item": { "id": 1 },
            "slot": { "type": slot, "name": slot },
            "name": name,
            "enchantments": enchantments,
            "sockets": sockets
        })
    }

    fn gem() -> serde_json::Value {
        serde_json::json!({
            "socket_type": { "type": "PRISMATIC", "name": "Prismatic Socket" },
            "item": { "id": 2, "name": "Gem" }
        })
    }

    fn empty_socket() -> serde_json::Value {
        serde_json::json!({
            "socket_type": { "type": "PRISMATIC", "name": "Prismatic Socket" }
        })
    }

    fn full_baseline() -> CharacterEquipment {
        serde_json::from_value(serde_json::json!({
            "equipped_items": [
                item("HEAD", "Helm", None, serde_json::json!([gem()])),
                item("NECK", "Amulet", None, serde_json::json!([gem()])),
                item("BACK", "Cloak", Some("PERMANENT"), serde_json::json!([])),
                item("CHEST", "Tunic", Some("PERMANENT"), serde_json::json!([])),
                item("WRIST", "Bracers", Some("PERMANENT"), serde_json::json!([gem()])),
                item("WAIST", "Belt", None, serde_json::json!([gem()])),
                item("LEGS", "Pants", Some("PERMANENT"), serde_json::json!([])),
                item("FEET", "Boots", Some("PERMANENT"), serde_json::json!([])),
                item("FINGER_1", "Ring", Some("PERMANENT"), serde_json::json!([gem()])),
                item("FINGER_2", "Band", Some("PERMANENT"), serde_json::json!([gem()])),
                item("MAIN_HAND", "Sword", Some("PERMANENT"), serde_json::json!([])),
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_clean_audit() {
        let audit = audit_equipment(&full_baseline());
        assert!(audit.is_clean(), "unexpected findings: {:?}", audit.findings);
        assert_eq!(audit.report(), "All expected enchants and gems are in place.");
    }

    #[test]
    fn test_missing_enchant() {
        let mut equipment = full_baseline();
        equipment
            .equipped_items
            .retain(|i| i.name != "Cloak");
        equipment.equipped_items.push(
            serde_json::from_value(item("BACK", "Bare Cloak", None, serde_json::json!([])))
                .unwrap(),
        );

        let audit = audit_equipment(&equipment);
        let missing: Vec<_> = audit.of_kind(FindingKind::MissingEnchant).collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].slot, SlotType::Back);
        assert!(audit.report().contains("Back (Bare Cloak): missing enchant"));
    }

    #[test]
    fn test_temporary_buff_is_not_an_enchant() {
        let mut equipment = full_baseline();
        equipment.equipped_items.retain(|i| i.name != "Sword");
        equipment.equipped_items.push(
            serde_json::from_value(item(
                "MAIN_HAND",
                "Oiled Sword",
                Some("TEMPORARY"),
                serde_json::json!([]),
            ))
            .unwrap(),
        );

        let audit = audit_equipment(&equipment);
        assert_eq!(audit.of_kind(FindingKind::MissingEnchant).count(), 1);
    }

    #[test]
    fn test_missing_and_empty_sockets() {
        let mut equipment = full_baseline();
        equipment.equipped_items.retain(|i| i.name != "Helm" && i.name != "Amulet");
        // Helm with no socket at all, amulet with an ungemmed socket
        equipment.equipped_items.push(
            serde_json::from_value(item("HEAD", "Plain Helm", None, serde_json::json!([])))
                .unwrap(),
        );
        equipment.equipped_items.push(
            serde_json::from_value(item(
                "NECK",
                "Hollow Amulet",
                None,
                serde_json::json!([empty_socket()]),
            ))
            .unwrap(),
        );

        let audit = audit_equipment(&equipment);
        assert_eq!(audit.of_kind(FindingKind::MissingSocket).count(), 1);
        assert_eq!(audit.of_kind(FindingKind::EmptySocket).count(), 1);
    }

    #[test]
    fn test_empty_slot_reported_once() {
        let mut equipment = full_baseline();
        // Finger1 is in both the enchant and the socket baseline
        equipment.equipped_items.retain(|i| i.name != "Ring");

        let audit = audit_equipment(&equipment);
        let empty: Vec<_> = audit.of_kind(FindingKind::EmptySlot).collect();
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].slot, SlotType::Finger1);
    }
}
