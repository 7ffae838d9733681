//! Item type enumeration and item stacks.

use std::hash::{Hash, Hasher};

use crate::id::Identifier;

mod stack;
mod builder;

pub use stack::{ItemStack, EMPTY};
pub use builder::ItemStackBuilder;


/// Internal macro to easily define the items registry.
macro_rules! items {
    (
        $($ident:ident : $name:literal / $max_amount:literal / $max_durability:literal),* $(,)?
    ) => {

        $(pub static $ident: ItemType = ItemType::new(
            concat!("minecraft:", $name),
            $max_amount,
            $max_durability,
        );)*

        static ITEMS: &[&ItemType] = &[$(&$ident),*];

    };
}

items! {
    AIR:                "air"                   / 64 / 0,
    STONE:              "stone"                 / 64 / 0,
    COBBLESTONE:        "cobblestone"           / 64 / 0,
    DIRT:               "dirt"                  / 64 / 0,
    STICK:              "stick"                 / 64 / 0,
    DIAMOND:            "diamond"               / 64 / 0,
    IRON_INGOT:         "iron_ingot"            / 64 / 0,
    APPLE:              "apple"                 / 64 / 0,
    ARROW:              "arrow"                 / 64 / 0,
    BOOK:               "book"                  / 64 / 0,
    ENCHANTED_BOOK:     "enchanted_book"        / 1  / 0,
    ENDER_PEARL:        "ender_pearl"           / 16 / 0,
    SNOWBALL:           "snowball"              / 16 / 0,
    EGG:                "egg"                   / 16 / 0,
    BUCKET:             "bucket"                / 16 / 0,
    WATER_BUCKET:       "water_bucket"          / 1  / 0,
    SADDLE:             "saddle"                / 1  / 0,
    WOODEN_SWORD:       "wooden_sword"          / 1  / 59,
    STONE_SWORD:        "stone_sword"           / 1  / 131,
    GOLDEN_SWORD:       "golden_sword"          / 1  / 32,
    IRON_SWORD:         "iron_sword"            / 1  / 250,
    DIAMOND_SWORD:      "diamond_sword"         / 1  / 1561,
    IRON_SHOVEL:        "iron_shovel"           / 1  / 250,
    IRON_PICKAXE:       "iron_pickaxe"          / 1  / 250,
    IRON_AXE:           "iron_axe"              / 1  / 250,
    DIAMOND_PICKAXE:    "diamond_pickaxe"       / 1  / 1561,
    FLINT_AND_STEEL:    "flint_and_steel"       / 1  / 64,
    FISHING_ROD:        "fishing_rod"           / 1  / 64,
    SHEARS:             "shears"                / 1  / 238,
    BOW:                "bow"                   / 1  / 384,
    TRIDENT:            "trident"               / 1  / 250,
    SHIELD:             "shield"                / 1  / 336,
    ELYTRA:             "elytra"                / 1  / 432,
    DIAMOND_HELMET:     "diamond_helmet"        / 1  / 363,
    DIAMOND_CHESTPLATE: "diamond_chestplate"    / 1  / 528,
    DIAMOND_LEGGINGS:   "diamond_leggings"      / 1  / 495,
    DIAMOND_BOOTS:      "diamond_boots"         / 1  / 429,
}


/// Get an item type from its name, the namespace may be omitted, in which case the
/// default `minecraft` namespace is used.
pub fn from_name(name: &str) -> Option<&'static ItemType> {
    let id = name.parse::<Identifier>().ok()?;
    ITEMS.iter().copied().find(|item| id.matches(item.name))
}

/// Get all registered item types.
#[inline]
pub fn all() -> &'static [&'static ItemType] {
    ITEMS
}


/// This structure describe an item type. Two item types are considered the same if
/// they share the same name.
#[derive(Debug, Clone, Copy)]
pub struct ItemType {
    /// The full name of the item, including its namespace.
    pub name: &'static str,
    /// Maximum stack size for this item.
    pub max_amount: i32,
    /// Number of uses before the item breaks, zero if the item can't be damaged.
    pub max_durability: i32,
}

impl ItemType {

    pub const fn new(name: &'static str, max_amount: i32, max_durability: i32) -> Self {
        Self {
            name,
            max_amount,
            max_durability,
        }
    }

}

impl PartialEq for ItemType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ItemType {}

impl Hash for ItemType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
