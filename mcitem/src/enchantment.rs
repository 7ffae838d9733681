//! Enchantment type enumeration and the enchantment value stored on item stacks.

use std::hash::{Hash, Hasher};
use std::fmt;

use tracing::{trace, warn};

use crate::nbt::NbtCompound;
use crate::id::Identifier;
use crate::config;


/// Internal macro to easily define the enchantments registry.
macro_rules! enchantments {
    (
        $($ident:ident : $name:literal / $max_level:literal),* $(,)?
    ) => {

        $(pub static $ident: EnchantmentType = EnchantmentType::new(
            concat!("minecraft:", $name),
            $max_level,
        );)*

        static ENCHANTMENTS: &[&EnchantmentType] = &[$(&$ident),*];

    };
}

enchantments! {
    PROTECTION:             "protection"            / 4,
    FIRE_PROTECTION:        "fire_protection"       / 4,
    FEATHER_FALLING:        "feather_falling"       / 4,
    BLAST_PROTECTION:       "blast_protection"      / 4,
    PROJECTILE_PROTECTION:  "projectile_protection" / 4,
    RESPIRATION:            "respiration"           / 3,
    AQUA_AFFINITY:          "aqua_affinity"         / 1,
    THORNS:                 "thorns"                / 3,
    SHARPNESS:              "sharpness"             / 5,
    SMITE:                  "smite"                 / 5,
    BANE_OF_ARTHROPODS:     "bane_of_arthropods"    / 5,
    KNOCKBACK:              "knockback"             / 2,
    FIRE_ASPECT:            "fire_aspect"           / 2,
    LOOTING:                "looting"               / 3,
    EFFICIENCY:             "efficiency"            / 5,
    SILK_TOUCH:             "silk_touch"            / 1,
    UNBREAKING:             "unbreaking"            / 3,
    FORTUNE:                "fortune"               / 3,
    POWER:                  "power"                 / 5,
    PUNCH:                  "punch"                 / 2,
    FLAME:                  "flame"                 / 1,
    INFINITY:               "infinity"              / 1,
    LUCK_OF_THE_SEA:        "luck_of_the_sea"       / 3,
    LURE:                   "lure"                  / 3,
    MENDING:                "mending"               / 1,
}


/// Get an enchantment type from its name, the namespace may be omitted, in which case
/// the default `minecraft` namespace is used. Malformed names are simply unknown.
pub fn from_name(name: &str) -> Option<&'static EnchantmentType> {
    let id = name.parse::<Identifier>().ok()?;
    ENCHANTMENTS.iter().copied().find(|ench| id.matches(ench.name))
}

/// Get all registered enchantment types.
#[inline]
pub fn all() -> &'static [&'static EnchantmentType] {
    ENCHANTMENTS
}


/// This structure describe an enchantment type. Two enchantment types are considered
/// the same if they share the same name.
#[derive(Debug, Clone, Copy)]
pub struct EnchantmentType {
    /// The full name of the enchantment, including its namespace.
    pub name: &'static str,
    /// The maximum level obtainable without commands.
    pub max_level: u16,
}

impl EnchantmentType {

    pub const fn new(name: &'static str, max_level: u16) -> Self {
        Self { name, max_level }
    }

}

impl PartialEq for EnchantmentType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EnchantmentType {}

impl Hash for EnchantmentType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}


/// The highest level that can be stored in the `lvl` short.
pub const MAX_STORED_LEVEL: u16 = i16::MAX as u16;


/// An enchantment type applied at a given level. The level never exceeds
/// [`MAX_STORED_LEVEL`], so an enchantment always reads back from a tree as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Enchantment {
    pub ty: &'static EnchantmentType,
    level: u16,
}

impl Enchantment {

    /// Create an enchantment, levels above [`MAX_STORED_LEVEL`] are clamped to it.
    #[inline]
    pub fn new(ty: &'static EnchantmentType, level: u16) -> Self {
        Self { ty, level: level.min(MAX_STORED_LEVEL) }
    }

    #[inline]
    pub fn level(&self) -> u16 {
        self.level
    }

    /// Decode an enchantment from its `{id, lvl}` compound. None is returned if the id
    /// is missing or doesn't resolve to a known enchantment type, these entries are
    /// expected from trees written by other versions and are just skipped.
    pub fn from_nbt(comp: &NbtCompound) -> Option<Self> {

        let Some(id) = comp.get_string("id") else {
            trace!("enchantment without id: {comp:?}");
            return None;
        };

        let Some(ty) = from_name(id) else {
            if config::warn_unknown_enchantment() {
                warn!("dropping unknown enchantment: {id}");
            } else {
                trace!("dropping unknown enchantment: {id}");
            }
            return None;
        };

        // Negative levels can only come from foreign trees, they read back as zero.
        let level = comp.get_short("lvl").unwrap_or(0).max(0) as u16;
        Some(Self { ty, level })

    }

    /// Encode this enchantment into a `{id, lvl}` compound.
    pub fn to_nbt(&self) -> NbtCompound {
        let mut comp = NbtCompound::new();
        comp.insert("id", self.ty.name);
        comp.insert("lvl", self.level as i16);
        comp
    }

}

impl fmt::Display for Enchantment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty.name, self.level)
    }
}
