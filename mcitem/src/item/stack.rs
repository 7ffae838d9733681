//! Item stack value, with its damage and enchantments stored in an optional NBT tree.

use std::fmt;

use once_cell::sync::Lazy;
use tracing::trace;

use crate::enchantment::{self, Enchantment, EnchantmentType};
use crate::nbt::NbtCompound;

use super::{ItemType, ItemStackBuilder, AIR, BOOK, ENCHANTED_BOOK};


/// Key of the integer damage tag.
const DAMAGE: &str = "Damage";
/// Key of the boolean tag that disables damage.
const UNBREAKABLE: &str = "Unbreakable";
/// Key of the list of `{id, lvl}` enchantment compounds.
const ENCHANTMENTS: &str = "Enchantments";


/// The shared empty stack, with an empty but present tree.
pub static EMPTY: Lazy<ItemStack> = Lazy::new(|| ItemStack::from_parts(&AIR, 0, Some(NbtCompound::new()), 0));


/// An item stack defines an item type, the number of items and an optional tree of
/// attributes (damage, enchantments and any unknown tag).
///
/// A stack is empty when its type is air or when its amount is zero or negative. While
/// empty, the stored type and amount are kept but masked: [`Self::ty`] returns air and
/// [`Self::amount`] returns zero.
#[derive(Debug, Clone)]
pub struct ItemStack {
    /// The type of the item.
    ty: &'static ItemType,
    /// The raw stack size, it's not clamped and can be negative.
    amount: i32,
    /// The attribute tree, none is read exactly like a tree without any known key.
    nbt: Option<NbtCompound>,
    /// Opaque compatibility data for older protocols, -1 by default.
    legacy_data: i32,
    /// Cache of `is_empty`, updated each time the type or amount changes.
    empty: bool,
}

impl ItemStack {

    pub(crate) fn from_parts(ty: &'static ItemType, amount: i32, nbt: Option<NbtCompound>, legacy_data: i32) -> Self {
        let mut stack = Self {
            ty,
            amount,
            nbt,
            legacy_data,
            empty: false,
        };
        stack.update_empty();
        stack
    }

    /// Create a new stack of the given type and amount, without attribute tree.
    #[inline]
    pub fn new(ty: &'static ItemType, amount: i32) -> Self {
        Self::from_parts(ty, amount, None, -1)
    }

    /// Return a clone of the shared [`EMPTY`] stack.
    #[inline]
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    /// Start building a stack, see [`ItemStackBuilder`].
    #[inline]
    pub fn builder() -> ItemStackBuilder {
        ItemStackBuilder::new()
    }

    /// Return true if this item stack is air or has no item, this is computed from the
    /// stored type and amount, even when masked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self.ty == AIR || self.amount <= 0
    }

    #[inline]
    fn update_empty(&mut self) {
        self.empty = self.is_empty();
    }

    #[inline]
    fn cached_empty(&self) -> bool {
        debug_assert_eq!(self.empty, self.is_empty(), "stale empty cache");
        self.empty
    }

    /// Get the item type, air if the stack is empty.
    #[inline]
    pub fn ty(&self) -> &'static ItemType {
        if self.cached_empty() { &AIR } else { self.ty }
    }

    /// Return true if this stack is of the given type.
    #[inline]
    pub fn is(&self, ty: &ItemType) -> bool {
        self.ty() == ty
    }

    /// Get the number of items, zero if the stack is empty.
    #[inline]
    pub fn amount(&self) -> i32 {
        if self.cached_empty() { 0 } else { self.amount }
    }

    /// Set the number of items, any value is accepted and zero or negative amounts
    /// make the stack empty.
    pub fn set_amount(&mut self, amount: i32) {
        self.amount = amount;
        self.update_empty();
    }

    #[inline]
    pub fn grow(&mut self, amount: i32) {
        self.set_amount(self.amount().saturating_add(amount));
    }

    #[inline]
    pub fn shrink(&mut self, amount: i32) {
        self.set_amount(self.amount().saturating_sub(amount));
    }

    /// Take at most the given number of items out of this stack into a new stack,
    /// which also receives a copy of the attribute tree. Nothing is taken for zero or
    /// negative counts and the returned stack is then empty.
    pub fn split(&mut self, to_take: i32) -> ItemStack {
        let taken = to_take.min(self.amount()).max(0);
        let mut stack = self.copy();
        stack.set_amount(taken);
        self.shrink(taken);
        stack
    }

    /// Copy this stack, deep copying its tree, or creating an empty tree if absent.
    /// Copying an empty stack returns the shared empty stack.
    pub fn copy(&self) -> ItemStack {
        if self.cached_empty() {
            Self::empty()
        } else {
            let nbt = self.nbt.clone().unwrap_or_default();
            Self::from_parts(self.ty, self.amount, Some(nbt), self.legacy_data)
        }
    }

    /// Get the maximum number of items in a stack of this type.
    #[inline]
    pub fn max_stack_size(&self) -> i32 {
        self.ty().max_amount
    }

    /// Return true if this stack can hold more than one item. Damaged stacks never
    /// stack, so they don't merge with intact ones.
    pub fn is_stackable(&self) -> bool {
        self.max_stack_size() > 1 && (!self.is_damageable_item() || !self.is_damaged())
    }

    /// Get the attribute tree, if any.
    #[inline]
    pub fn nbt(&self) -> Option<&NbtCompound> {
        self.nbt.as_ref()
    }

    /// Get the attribute tree mutably, if any. Changing the tree never changes the
    /// emptiness of the stack.
    #[inline]
    pub fn nbt_mut(&mut self) -> Option<&mut NbtCompound> {
        self.nbt.as_mut()
    }

    /// Replace the attribute tree, returning the previous one.
    #[inline]
    pub fn set_nbt(&mut self, nbt: Option<NbtCompound>) -> Option<NbtCompound> {
        std::mem::replace(&mut self.nbt, nbt)
    }

    /// Get the attribute tree, creating an empty one if absent.
    pub fn get_or_create_nbt(&mut self) -> &mut NbtCompound {
        let ty = self.ty;
        self.nbt.get_or_insert_with(|| {
            trace!("creating attribute tree for {}", ty.name);
            NbtCompound::new()
        })
    }

    #[inline]
    pub fn legacy_data(&self) -> i32 {
        self.legacy_data
    }

    #[inline]
    pub fn set_legacy_data(&mut self, legacy_data: i32) {
        self.legacy_data = legacy_data;
    }

    /// Get the number of uses before an item of this type breaks.
    #[inline]
    pub fn max_damage(&self) -> i32 {
        self.ty().max_durability
    }

    /// Return true if items of this type have a durability, regardless of the damage.
    #[inline]
    pub fn can_be_depleted(&self) -> bool {
        self.max_damage() > 0
    }

    /// Return true if this stack takes damage when used, this is false for empty
    /// stacks, types without durability and unbreakable stacks.
    pub fn is_damageable_item(&self) -> bool {
        if self.cached_empty() || self.ty.max_durability <= 0 {
            return false;
        }
        !self.nbt.as_ref().and_then(|nbt| nbt.get_boolean(UNBREAKABLE)).unwrap_or(false)
    }

    #[inline]
    pub fn is_damaged(&self) -> bool {
        self.is_damageable_item() && self.damage_value() > 0
    }

    /// Get the damage value, zero if not set.
    #[inline]
    pub fn damage_value(&self) -> i32 {
        self.nbt.as_ref().and_then(|nbt| nbt.get_int(DAMAGE)).unwrap_or(0)
    }

    /// Set the damage value, negative values are stored as zero.
    pub fn set_damage_value(&mut self, damage: i32) {
        self.get_or_create_nbt().insert(DAMAGE, damage.max(0));
    }

    /// Return true if the enchantment list of this stack is present and not empty.
    pub fn is_enchanted(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.nbt.as_ref()
            .and_then(|nbt| nbt.get_compound_list(ENCHANTMENTS))
            .is_some_and(|list| !list.is_empty())
    }

    /// Return true if this stack can be enchanted at an enchanting table. Books are
    /// enchantable one at a time, enchanted books never are, and other items need to
    /// be unstackable tools or armors not already enchanted.
    pub fn is_enchantable(&self) -> bool {
        if self.is(&BOOK) {
            self.amount() == 1
        } else if self.is(&ENCHANTED_BOOK) {
            false
        } else {
            self.max_stack_size() == 1 && self.can_be_depleted() && !self.is_enchanted()
        }
    }

    /// Decode the enchantments of this stack, in their stored order. Unknown
    /// enchantments are skipped.
    pub fn enchantments(&self) -> Vec<Enchantment> {
        read_enchantments(self.nbt.as_ref())
    }

    /// Get the level of the first enchantment of the given type, zero if absent.
    pub fn enchantment_level(&self, ty: &EnchantmentType) -> u16 {

        if !self.is_enchanted() {
            return 0;
        }

        debug_assert!(self.nbt.is_some(), "enchanted stack without tree");
        let Some(list) = self.nbt.as_ref().and_then(|nbt| nbt.get_compound_list(ENCHANTMENTS)) else {
            return 0;
        };

        list.iter()
            .find(|comp| comp.get_string("id").and_then(enchantment::from_name) == Some(ty))
            .map(|comp| comp.get_short("lvl").unwrap_or(0).max(0) as u16)
            .unwrap_or(0)

    }

    /// Replace all enchantments of this stack, creating the tree if absent. An empty
    /// list removes the enchantment list from the tree.
    pub fn set_enchantments(&mut self, enchantments: &[Enchantment]) {
        let nbt = self.get_or_create_nbt();
        if enchantments.is_empty() {
            nbt.remove(ENCHANTMENTS);
        } else {
            let list = enchantments.iter().map(Enchantment::to_nbt).collect::<Vec<_>>();
            nbt.insert(ENCHANTMENTS, list);
        }
    }

    /// Return true if both stacks are of the same type and their trees match, see
    /// [`Self::tag_matches`].
    #[inline]
    pub fn is_same_item_same_tags(left: &ItemStack, right: &ItemStack) -> bool {
        left.is(right.ty()) && Self::tag_matches(left, right)
    }

    /// Return true if both stacks are empty, or if both are not empty and their trees
    /// are either both absent or equal. An absent tree never matches a present one,
    /// even if the present tree is empty.
    pub fn tag_matches(left: &ItemStack, right: &ItemStack) -> bool {
        let (left_empty, right_empty) = (left.is_empty(), right.is_empty());
        (left_empty && right_empty)
            || (!left_empty && !right_empty
                && (left.nbt.is_some() || right.nbt.is_none())
                && (left.nbt.is_none() || left.nbt == right.nbt))
    }

}

impl Default for ItemStack {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for ItemStack {
    fn eq(&self, other: &Self) -> bool {
        self.ty() == other.ty()
            && self.amount == other.amount
            && self.nbt == other.nbt
            && self.legacy_data == other.legacy_data
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {

        if self.cached_empty() {
            return f.write_str("ItemStack[null]");
        }

        write!(f, "ItemStack[type={}, amount={}/{}, nbt tag names: ", self.ty.name, self.amount, self.max_stack_size())?;
        match &self.nbt {
            Some(nbt) => {
                f.write_str("[")?;
                for (i, key) in nbt.keys().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(key)?;
                }
                f.write_str("]")?;
            }
            None => f.write_str("[null]")?,
        }
        write!(f, ", legacyData={}]", self.legacy_data)

    }
}


/// Decode all known enchantments from the given tree, an absent tree or list yields
/// no enchantment.
pub(crate) fn read_enchantments(nbt: Option<&NbtCompound>) -> Vec<Enchantment> {
    let Some(list) = nbt.and_then(|nbt| nbt.get_compound_list(ENCHANTMENTS)) else {
        return Vec::new();
    };
    list.iter().filter_map(Enchantment::from_nbt).collect()
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::enchantment::{SHARPNESS, UNBREAKING, MENDING, EFFICIENCY, MAX_STORED_LEVEL};
    use crate::item::{DIAMOND_SWORD, DIAMOND_PICKAXE, STONE, COBBLESTONE, IRON_SWORD, STICK};
    use crate::nbt::Nbt;

    /// A stackable item with durability, no vanilla item is like this.
    static STACKABLE_TOOL: ItemType = ItemType::new("test:stackable_tool", 64, 100);

    fn enchanted_tree(entries: &[(&str, i16)]) -> NbtCompound {
        let list = entries.iter().map(|&(id, lvl)| {
            let mut comp = NbtCompound::new();
            comp.insert("id", id);
            comp.insert("lvl", lvl);
            comp
        }).collect::<Vec<_>>();
        let mut nbt = NbtCompound::new();
        nbt.insert(ENCHANTMENTS, list);
        nbt
    }

    #[test]
    fn empty_masking() {

        let mut stack = ItemStack::new(&STONE, 10);
        assert!(!stack.is_empty());
        assert_eq!(stack.ty(), &STONE);
        assert_eq!(stack.amount(), 10);

        stack.set_amount(0);
        assert!(stack.is_empty());
        assert_eq!(stack.ty(), &AIR);
        assert_eq!(stack.amount(), 0);

        stack.set_amount(-5);
        assert!(stack.is_empty());
        assert_eq!(stack.amount(), 0);

        // The stored type is only masked.
        stack.set_amount(3);
        assert_eq!(stack.ty(), &STONE);
        assert_eq!(stack.amount(), 3);

        let air = ItemStack::new(&AIR, 12);
        assert!(air.is_empty());
        assert_eq!(air.amount(), 0);

    }

    #[test]
    fn empty_static() {
        assert!(EMPTY.is_empty());
        assert_eq!(EMPTY.ty(), &AIR);
        assert_eq!(EMPTY.nbt(), Some(&NbtCompound::new()));
        assert_eq!(EMPTY.legacy_data(), 0);
        assert_eq!(ItemStack::default(), *EMPTY);
        assert_eq!(EMPTY.to_string(), "ItemStack[null]");
    }

    #[test]
    fn grow_shrink() {

        let mut stack = ItemStack::new(&STONE, 10);
        stack.grow(5);
        assert_eq!(stack.amount(), 15);
        stack.shrink(20);
        assert!(stack.is_empty());

        // Growing an empty stack starts from zero because the amount is masked.
        stack.grow(2);
        assert_eq!(stack.amount(), 2);
        assert_eq!(stack.ty(), &STONE);

    }

    #[test]
    fn split() {

        let mut stack = ItemStack::new(&STONE, 10);
        stack.set_damage_value(1);

        let taken = stack.split(4);
        assert_eq!(taken.amount(), 4);
        assert_eq!(stack.amount(), 6);
        assert_eq!(taken.damage_value(), 1);

        let taken = stack.split(100);
        assert_eq!(taken.amount(), 6);
        assert!(stack.is_empty());

        let mut stack = ItemStack::new(&STONE, 10);
        let taken = stack.split(0);
        assert!(taken.is_empty());
        assert_eq!(stack.amount(), 10);

        let taken = stack.split(-3);
        assert!(taken.is_empty());
        assert_eq!(stack.amount(), 10);

    }

    #[test]
    fn split_independent_trees() {

        let mut stack = ItemStack::new(&DIAMOND_SWORD, 2);
        stack.set_damage_value(7);

        let mut taken = stack.split(1);
        taken.set_damage_value(100);
        taken.get_or_create_nbt().insert("Custom", 1i8);

        assert_eq!(stack.damage_value(), 7);
        assert!(!stack.nbt().unwrap().contains_key("Custom"));

    }

    #[test]
    fn copy() {

        assert_eq!(EMPTY.copy(), *EMPTY);
        assert_eq!(ItemStack::new(&STONE, -1).copy(), *EMPTY);

        let mut stack = ItemStack::new(&IRON_SWORD, 1);
        stack.set_damage_value(3);
        stack.set_legacy_data(2);

        let mut copy = stack.copy();
        assert_eq!(copy, stack);

        copy.nbt_mut().unwrap().insert("Unbreakable", true);
        assert_ne!(copy, stack);
        assert_eq!(stack.nbt().unwrap().get_boolean("Unbreakable"), None);

        // An absent tree is copied as an empty tree.
        let stack = ItemStack::new(&STONE, 3);
        let copy = stack.copy();
        assert_eq!(copy.nbt(), Some(&NbtCompound::new()));
        assert_ne!(copy, stack);
        assert!(ItemStack::is_same_item_same_tags(&copy, &copy.copy()));

    }

    #[test]
    fn copy_with_nan() {

        let mut stack = ItemStack::new(&IRON_SWORD, 1);
        stack.get_or_create_nbt().insert("f", Nbt::Float(f32::NAN));
        stack.get_or_create_nbt().insert("d", vec![f64::NAN, 1.0]);

        assert_eq!(stack.clone(), stack);
        assert_eq!(stack.copy(), stack);
        assert!(ItemStack::is_same_item_same_tags(&stack, &stack.copy()));

    }

    #[test]
    fn damage() {

        let mut stack = ItemStack::new(&DIAMOND_SWORD, 1);
        assert!(stack.nbt().is_none());
        assert_eq!(stack.damage_value(), 0);
        assert!(stack.is_damageable_item());
        assert!(!stack.is_damaged());
        assert!(stack.can_be_depleted());
        assert_eq!(stack.max_damage(), 1561);

        stack.set_damage_value(5);
        assert_eq!(stack.damage_value(), 5);
        assert!(stack.is_damaged());
        assert!(!stack.is_stackable());

        stack.set_damage_value(-10);
        assert_eq!(stack.damage_value(), 0);
        assert!(!stack.is_damaged());
        // Still not stackable, only one sword per stack.
        assert!(!stack.is_stackable());

        // A damage tag of another type is ignored.
        stack.nbt_mut().unwrap().insert(DAMAGE, 5i16);
        assert_eq!(stack.damage_value(), 0);

    }

    #[test]
    fn damage_stackable() {

        let mut stack = ItemStack::new(&STACKABLE_TOOL, 4);
        assert!(stack.is_stackable());

        stack.set_damage_value(5);
        assert!(stack.is_damaged());
        assert!(!stack.is_stackable());

        stack.get_or_create_nbt().insert(UNBREAKABLE, true);
        assert!(!stack.is_damageable_item());
        assert!(!stack.is_damaged());
        assert!(stack.is_stackable());

        let stone = ItemStack::new(&STONE, 1);
        assert!(!stone.is_damageable_item());
        assert!(!stone.can_be_depleted());
        assert!(stone.is_stackable());

        let empty_tool = ItemStack::new(&STACKABLE_TOOL, 0);
        assert!(!empty_tool.is_damageable_item());

    }

    #[test]
    fn enchantments_roundtrip() {

        let list = [
            Enchantment::new(&SHARPNESS, 5),
            Enchantment::new(&UNBREAKING, 3),
            Enchantment::new(&MENDING, 1),
        ];

        let mut stack = ItemStack::new(&DIAMOND_SWORD, 1);
        assert!(!stack.is_enchanted());
        assert!(stack.enchantments().is_empty());

        stack.set_enchantments(&list);
        assert!(stack.is_enchanted());
        assert_eq!(stack.enchantments(), list);
        assert_eq!(stack.enchantment_level(&UNBREAKING), 3);
        assert_eq!(stack.enchantment_level(&EFFICIENCY), 0);

        let stored = stack.nbt().unwrap().get_compound_list(ENCHANTMENTS).unwrap();
        assert_eq!(stored[0].get_string("id"), Some("minecraft:sharpness"));
        assert_eq!(stored[0].get_short("lvl"), Some(5));

        stack.set_enchantments(&[Enchantment::new(&EFFICIENCY, 2)]);
        assert_eq!(stack.enchantments(), [Enchantment::new(&EFFICIENCY, 2)]);

        // The largest level and anything built above it both read back unchanged.
        let list = [
            Enchantment::new(&SHARPNESS, MAX_STORED_LEVEL),
            Enchantment::new(&UNBREAKING, 40000),
        ];
        stack.set_enchantments(&list);
        assert_eq!(stack.enchantments(), list);
        assert_eq!(stack.enchantment_level(&UNBREAKING), MAX_STORED_LEVEL);

    }

    #[test]
    fn enchantments_clear() {

        let mut stack = ItemStack::new(&DIAMOND_SWORD, 1);
        stack.set_enchantments(&[Enchantment::new(&SHARPNESS, 1)]);
        stack.set_enchantments(&[]);

        assert!(!stack.nbt().unwrap().contains_key(ENCHANTMENTS));
        assert!(!stack.is_enchanted());

        // Clearing without tree creates an empty tree.
        let mut stack = ItemStack::new(&DIAMOND_SWORD, 1);
        stack.set_enchantments(&[]);
        assert_eq!(stack.nbt(), Some(&NbtCompound::new()));

        // An empty list present in the tree is not enchanted.
        stack.nbt_mut().unwrap().insert(ENCHANTMENTS, Vec::<NbtCompound>::new());
        assert!(!stack.is_enchanted());

    }

    #[test]
    fn enchantments_unknown_skipped() {

        let nbt = enchanted_tree(&[
            ("minecraft:sweeping", 2),
            ("sharpness", 3),
            ("Not An Id", 1),
            ("minecraft:mending", 1),
        ]);

        let mut stack = ItemStack::new(&DIAMOND_SWORD, 1);
        stack.set_nbt(Some(nbt));

        assert!(stack.is_enchanted());
        assert_eq!(stack.enchantments(), [
            Enchantment::new(&SHARPNESS, 3),
            Enchantment::new(&MENDING, 1),
        ]);
        assert_eq!(stack.enchantment_level(&SHARPNESS), 3);

        // The first matching entry wins.
        stack.set_nbt(Some(enchanted_tree(&[("sharpness", 1), ("sharpness", 4)])));
        assert_eq!(stack.enchantment_level(&SHARPNESS), 1);

        // An enchantment list of the wrong type is absent.
        stack.nbt_mut().unwrap().insert(ENCHANTMENTS, vec![1i16, 2]);
        assert!(!stack.is_enchanted());
        assert!(stack.enchantments().is_empty());

    }

    #[test]
    fn enchantment_level_empty_stack() {
        let mut stack = ItemStack::new(&DIAMOND_SWORD, 1);
        stack.set_enchantments(&[Enchantment::new(&SHARPNESS, 2)]);
        stack.set_amount(0);
        assert!(!stack.is_enchanted());
        assert_eq!(stack.enchantment_level(&SHARPNESS), 0);
    }

    #[test]
    fn enchantable() {

        assert!(ItemStack::new(&BOOK, 1).is_enchantable());
        assert!(!ItemStack::new(&BOOK, 2).is_enchantable());
        assert!(!ItemStack::new(&ENCHANTED_BOOK, 1).is_enchantable());
        assert!(!ItemStack::new(&STICK, 1).is_enchantable());
        assert!(!ItemStack::new(&STACKABLE_TOOL, 1).is_enchantable());

        let mut stack = ItemStack::new(&DIAMOND_PICKAXE, 1);
        assert!(stack.is_enchantable());
        stack.set_enchantments(&[Enchantment::new(&EFFICIENCY, 5)]);
        assert!(!stack.is_enchantable());

    }

    #[test]
    fn tag_matches() {

        let with_tree = |amount: i32, damage: Option<i32>| {
            let mut stack = ItemStack::new(&IRON_SWORD, amount);
            if let Some(damage) = damage {
                stack.set_damage_value(damage);
            }
            stack
        };

        let empty_a = ItemStack::new(&STONE, 0);
        let mut empty_b = ItemStack::new(&IRON_SWORD, 0);
        empty_b.set_damage_value(3);
        assert!(ItemStack::tag_matches(&empty_a, &empty_b));

        assert!(!ItemStack::tag_matches(&empty_a, &with_tree(1, None)));
        assert!(!ItemStack::tag_matches(&with_tree(1, None), &empty_a));

        assert!(ItemStack::tag_matches(&with_tree(1, None), &with_tree(1, None)));
        assert!(!ItemStack::tag_matches(&with_tree(1, Some(0)), &with_tree(1, None)));
        assert!(!ItemStack::tag_matches(&with_tree(1, None), &with_tree(1, Some(0))));
        assert!(ItemStack::tag_matches(&with_tree(1, Some(2)), &with_tree(3, Some(2))));
        assert!(!ItemStack::tag_matches(&with_tree(1, Some(2)), &with_tree(1, Some(3))));

        // Present but empty trees don't match absent trees.
        let mut bare = with_tree(1, None);
        bare.set_nbt(Some(NbtCompound::new()));
        assert!(!ItemStack::tag_matches(&bare, &with_tree(1, None)));
        assert!(!ItemStack::tag_matches(&with_tree(1, None), &bare));

    }

    #[test]
    fn same_item_same_tags() {
        let sword = ItemStack::new(&IRON_SWORD, 1);
        assert!(ItemStack::is_same_item_same_tags(&sword, &ItemStack::new(&IRON_SWORD, 5)));
        assert!(!ItemStack::is_same_item_same_tags(&sword, &ItemStack::new(&DIAMOND_SWORD, 1)));
        assert!(ItemStack::is_same_item_same_tags(&*EMPTY, &ItemStack::new(&STONE, 0)));
    }

    #[test]
    fn equality() {

        let stack = ItemStack::new(&STONE, 4);
        assert_eq!(stack, ItemStack::new(&STONE, 4));
        assert_ne!(stack, ItemStack::new(&STONE, 5));
        assert_ne!(stack, ItemStack::new(&COBBLESTONE, 4));

        let mut other = ItemStack::new(&STONE, 4);
        other.set_legacy_data(3);
        assert_ne!(stack, other);

        // Empty stacks compare their raw amount.
        assert_ne!(ItemStack::new(&STONE, 0), ItemStack::new(&STONE, -1));
        assert_eq!(ItemStack::new(&STONE, 0), ItemStack::new(&DIAMOND_SWORD, 0));

    }

    #[test]
    fn display() {

        let mut stack = ItemStack::new(&DIAMOND_SWORD, 1);
        assert_eq!(stack.to_string(), "ItemStack[type=minecraft:diamond_sword, amount=1/1, nbt tag names: [null], legacyData=-1]");

        stack.set_damage_value(4);
        stack.set_enchantments(&[Enchantment::new(&SHARPNESS, 1)]);
        assert_eq!(stack.to_string(), "ItemStack[type=minecraft:diamond_sword, amount=1/1, nbt tag names: [Damage, Enchantments], legacyData=-1]");

        stack.shrink(1);
        assert_eq!(stack.to_string(), "ItemStack[null]");

    }

    #[test]
    fn nbt_replace() {
        let mut stack = ItemStack::new(&STONE, 1);
        assert_eq!(stack.set_nbt(Some(NbtCompound::new())), None);
        stack.get_or_create_nbt().insert("Foo", Nbt::Int(1));
        let previous = stack.set_nbt(None).unwrap();
        assert_eq!(previous.get_int("Foo"), Some(1));
        assert!(stack.nbt().is_none());
    }

}
