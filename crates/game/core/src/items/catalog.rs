//! Static item catalog.
//!
//! The catalog is fixed by the game contract: ids `1..=101`, each with a tier,
//! an equipment slot and an item type. Market generation, pricing and
//! equipment lookups all read from this one table.

use super::types::{ItemType, Slot, Tier};
use crate::config::GameConfig;

/// Immutable catalog entry for an item id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItemDefinition {
    pub id: u8,
    pub name: &'static str,
    pub tier: Tier,
    pub slot: Slot,
    pub kind: ItemType,
}

const fn def(
    id: u8,
    name: &'static str,
    tier: Tier,
    slot: Slot,
    kind: ItemType,
) -> ItemDefinition {
    ItemDefinition {
        id,
        name,
        tier,
        slot,
        kind,
    }
}

/// All items, indexed by `id - 1`.
pub static ITEMS: [ItemDefinition; GameConfig::NUM_ITEMS as usize] = [
    def(1, "Pendant", Tier::T1, Slot::Neck, ItemType::Necklace),
    def(2, "Necklace", Tier::T1, Slot::Neck, ItemType::Necklace),
    def(3, "Amulet", Tier::T1, Slot::Neck, ItemType::Necklace),
    def(4, "Silver Ring", Tier::T2, Slot::Ring, ItemType::Ring),
    def(5, "Bronze Ring", Tier::T3, Slot::Ring, ItemType::Ring),
    def(6, "Platinum Ring", Tier::T1, Slot::Ring, ItemType::Ring),
    def(7, "Titanium Ring", Tier::T1, Slot::Ring, ItemType::Ring),
    def(8, "Gold Ring", Tier::T1, Slot::Ring, ItemType::Ring),
    def(9, "Ghost Wand", Tier::T1, Slot::Weapon, ItemType::Magic),
    def(10, "Grave Wand", Tier::T2, Slot::Weapon, ItemType::Magic),
    def(11, "Bone Wand", Tier::T3, Slot::Weapon, ItemType::Magic),
    def(12, "Wand", Tier::T5, Slot::Weapon, ItemType::Magic),
    def(13, "Grimoire", Tier::T1, Slot::Weapon, ItemType::Magic),
    def(14, "Chronicle", Tier::T2, Slot::Weapon, ItemType::Magic),
    def(15, "Tome", Tier::T3, Slot::Weapon, ItemType::Magic),
    def(16, "Book", Tier::T5, Slot::Weapon, ItemType::Magic),
    def(17, "Divine Robe", Tier::T1, Slot::Chest, ItemType::Cloth),
    def(18, "Silk Robe", Tier::T2, Slot::Chest, ItemType::Cloth),
    def(19, "Linen Robe", Tier::T3, Slot::Chest, ItemType::Cloth),
    def(20, "Robe", Tier::T4, Slot::Chest, ItemType::Cloth),
    def(21, "Shirt", Tier::T5, Slot::Chest, ItemType::Cloth),
    def(22, "Crown", Tier::T1, Slot::Head, ItemType::Cloth),
    def(23, "Divine Hood", Tier::T2, Slot::Head, ItemType::Cloth),
    def(24, "Silk Hood", Tier::T3, Slot::Head, ItemType::Cloth),
    def(25, "Linen Hood", Tier::T4, Slot::Head, ItemType::Cloth),
    def(26, "Hood", Tier::T5, Slot::Head, ItemType::Cloth),
    def(27, "Brightsilk Sash", Tier::T1, Slot::Waist, ItemType::Cloth),
    def(28, "Silk Sash", Tier::T2, Slot::Waist, ItemType::Cloth),
    def(29, "Wool Sash", Tier::T3, Slot::Waist, ItemType::Cloth),
    def(30, "Linen Sash", Tier::T4, Slot::Waist, ItemType::Cloth),
    def(31, "Sash", Tier::T5, Slot::Waist, ItemType::Cloth),
    def(32, "Divine Slippers", Tier::T1, Slot::Foot, ItemType::Cloth),
    def(33, "Silk Slippers", Tier::T2, Slot::Foot, ItemType::Cloth),
    def(34, "Wool Shoes", Tier::T3, Slot::Foot, ItemType::Cloth),
    def(35, "Linen Shoes", Tier::T4, Slot::Foot, ItemType::Cloth),
    def(36, "Shoes", Tier::T5, Slot::Foot, ItemType::Cloth),
    def(37, "Divine Gloves", Tier::T1, Slot::Hand, ItemType::Cloth),
    def(38, "Silk Gloves", Tier::T2, Slot::Hand, ItemType::Cloth),
    def(39, "Wool Gloves", Tier::T3, Slot::Hand, ItemType::Cloth),
    def(40, "Linen Gloves", Tier::T4, Slot::Hand, ItemType::Cloth),
    def(41, "Gloves", Tier::T5, Slot::Hand, ItemType::Cloth),
    def(42, "Katana", Tier::T1, Slot::Weapon, ItemType::Blade),
    def(43, "Falchion", Tier::T2, Slot::Weapon, ItemType::Blade),
    def(44, "Scimitar", Tier::T3, Slot::Weapon, ItemType::Blade),
    def(45, "Long Sword", Tier::T4, Slot::Weapon, ItemType::Blade),
    def(46, "Short Sword", Tier::T5, Slot::Weapon, ItemType::Blade),
    def(47, "Demon Husk", Tier::T1, Slot::Chest, ItemType::Hide),
    def(48, "Dragonskin Armor", Tier::T2, Slot::Chest, ItemType::Hide),
    def(49, "Studded Leather Armor", Tier::T3, Slot::Chest, ItemType::Hide),
    def(50, "Hard Leather Armor", Tier::T4, Slot::Chest, ItemType::Hide),
    def(51, "Leather Armor", Tier::T5, Slot::Chest, ItemType::Hide),
    def(52, "Demon Crown", Tier::T1, Slot::Head, ItemType::Hide),
    def(53, "Dragons Crown", Tier::T2, Slot::Head, ItemType::Hide),
    def(54, "War Cap", Tier::T3, Slot::Head, ItemType::Hide),
    def(55, "Leather Cap", Tier::T4, Slot::Head, ItemType::Hide),
    def(56, "Cap", Tier::T5, Slot::Head, ItemType::Hide),
    def(57, "Demonhide Belt", Tier::T1, Slot::Waist, ItemType::Hide),
    def(58, "Dragonskin Belt", Tier::T2, Slot::Waist, ItemType::Hide),
    def(59, "Studded Leather Belt", Tier::T3, Slot::Waist, ItemType::Hide),
    def(60, "Hard Leather Belt", Tier::T4, Slot::Waist, ItemType::Hide),
    def(61, "Leather Belt", Tier::T5, Slot::Waist, ItemType::Hide),
    def(62, "Demonhide Boots", Tier::T1, Slot::Foot, ItemType::Hide),
    def(63, "Dragonskin Boots", Tier::T2, Slot::Foot, ItemType::Hide),
    def(64, "Studded Leather Boots", Tier::T3, Slot::Foot, ItemType::Hide),
    def(65, "Hard Leather Boots", Tier::T4, Slot::Foot, ItemType::Hide),
    def(66, "Leather Boots", Tier::T5, Slot::Foot, ItemType::Hide),
    def(67, "Demons Hands", Tier::T1, Slot::Hand, ItemType::Hide),
    def(68, "Dragonskin Gloves", Tier::T2, Slot::Hand, ItemType::Hide),
    def(69, "Studded Leather Gloves", Tier::T3, Slot::Hand, ItemType::Hide),
    def(70, "Hard Leather Gloves", Tier::T4, Slot::Hand, ItemType::Hide),
    def(71, "Leather Gloves", Tier::T5, Slot::Hand, ItemType::Hide),
    def(72, "Warhammer", Tier::T1, Slot::Weapon, ItemType::Bludgeon),
    def(73, "Quarterstaff", Tier::T2, Slot::Weapon, ItemType::Bludgeon),
    def(74, "Maul", Tier::T3, Slot::Weapon, ItemType::Bludgeon),
    def(75, "Mace", Tier::T4, Slot::Weapon, ItemType::Bludgeon),
    def(76, "Club", Tier::T5, Slot::Weapon, ItemType::Bludgeon),
    def(77, "Holy Chestplate", Tier::T1, Slot::Chest, ItemType::Metal),
    def(78, "Ornate Chestplate", Tier::T2, Slot::Chest, ItemType::Metal),
    def(79, "Plate Mail", Tier::T3, Slot::Chest, ItemType::Metal),
    def(80, "Chain Mail", Tier::T4, Slot::Chest, ItemType::Metal),
    def(81, "Ring Mail", Tier::T5, Slot::Chest, ItemType::Metal),
    def(82, "Ancient Helm", Tier::T1, Slot::Head, ItemType::Metal),
    def(83, "Ornate Helm", Tier::T2, Slot::Head, ItemType::Metal),
    def(84, "Great Helm", Tier::T3, Slot::Head, ItemType::Metal),
    def(85, "Full Helm", Tier::T4, Slot::Head, ItemType::Metal),
    def(86, "Helm", Tier::T5, Slot::Head, ItemType::Metal),
    def(87, "Ornate Belt", Tier::T1, Slot::Waist, ItemType::Metal),
    def(88, "War Belt", Tier::T2, Slot::Waist, ItemType::Metal),
    def(89, "Plated Belt", Tier::T3, Slot::Waist, ItemType::Metal),
    def(90, "Mesh Belt", Tier::T4, Slot::Waist, ItemType::Metal),
    def(91, "Heavy Belt", Tier::T5, Slot::Waist, ItemType::Metal),
    def(92, "Holy Greaves", Tier::T1, Slot::Foot, ItemType::Metal),
    def(93, "Ornate Greaves", Tier::T2, Slot::Foot, ItemType::Metal),
    def(94, "Greaves", Tier::T3, Slot::Foot, ItemType::Metal),
    def(95, "Chain Boots", Tier::T4, Slot::Foot, ItemType::Metal),
    def(96, "Heavy Boots", Tier::T5, Slot::Foot, ItemType::Metal),
    def(97, "Holy Gauntlets", Tier::T1, Slot::Hand, ItemType::Metal),
    def(98, "Ornate Gauntlets", Tier::T2, Slot::Hand, ItemType::Metal),
    def(99, "Gauntlets", Tier::T3, Slot::Hand, ItemType::Metal),
    def(100, "Chain Gloves", Tier::T4, Slot::Hand, ItemType::Metal),
    def(101, "Heavy Gloves", Tier::T5, Slot::Hand, ItemType::Metal),
];

/// Look up an item definition by id. Returns `None` for 0 and ids past the catalog.
pub fn item(id: u8) -> Option<&'static ItemDefinition> {
    ITEMS.get(usize::from(id).checked_sub(1)?)
}

/// Iterate over the items that fit a given slot.
pub fn items_for_slot(slot: Slot) -> impl Iterator<Item = &'static ItemDefinition> {
    ITEMS.iter().filter(move |item| item.slot == slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_contiguous() {
        for (index, item) in ITEMS.iter().enumerate() {
            assert_eq!(usize::from(item.id), index + 1, "{} is misplaced", item.name);
        }
    }

    #[test]
    fn lookup_rejects_ids_outside_catalog() {
        assert!(item(0).is_none());
        assert!(item(102).is_none());
        assert_eq!(item(1).map(|i| i.name), Some("Pendant"));
        assert_eq!(item(101).map(|i| i.name), Some("Heavy Gloves"));
    }

    #[test]
    fn katana_is_a_tier_one_blade() {
        let katana = item(42).unwrap();
        assert_eq!(katana.name, "Katana");
        assert_eq!(katana.tier, Tier::T1);
        assert_eq!(katana.slot, Slot::Weapon);
        assert_eq!(katana.kind, ItemType::Blade);
    }

    #[test]
    fn slot_and_kind_are_consistent() {
        for item in &ITEMS {
            match item.slot {
                Slot::Weapon => assert!(item.kind.is_weapon(), "{}", item.name),
                Slot::Neck => assert_eq!(item.kind, ItemType::Necklace),
                Slot::Ring => assert_eq!(item.kind, ItemType::Ring),
                _ => assert!(item.kind.is_armor(), "{}", item.name),
            }
        }
    }

    #[test]
    fn every_armor_slot_has_fifteen_items() {
        for slot in [Slot::Chest, Slot::Head, Slot::Waist, Slot::Foot, Slot::Hand] {
            assert_eq!(items_for_slot(slot).count(), 15, "{slot}");
        }
        assert_eq!(items_for_slot(Slot::Weapon).count(), 18);
        assert_eq!(items_for_slot(Slot::Neck).count(), 3);
        assert_eq!(items_for_slot(Slot::Ring).count(), 5);
    }
}
