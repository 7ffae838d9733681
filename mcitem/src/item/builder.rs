//! Staged construction of item stacks.

use tracing::debug;

use crate::enchantment::Enchantment;
use crate::nbt::NbtCompound;

use super::stack::read_enchantments;
use super::{ItemStack, ItemType, AIR};


/// A builder for [`ItemStack`], by default the stack is a single air item without
/// attribute tree and with -1 legacy data.
///
/// Enchantments may come from two places: the explicit enchantment setters, and the
/// enchantments already present in the tree given to [`Self::nbt`]. The most recently
/// staged of the two wins, but a tree without any known enchantment doesn't stage
/// anything. When enchantments are staged, they are written to the built stack's tree,
/// which is created if no tree was given.
#[derive(Debug, Clone)]
pub struct ItemStackBuilder {
    ty: &'static ItemType,
    amount: i32,
    nbt: Option<NbtCompound>,
    legacy_data: i32,
    /// Enchantments given with `enchantments` or `add_enchantment`.
    explicit: Option<StagedEnchantments>,
    /// Enchantments decoded from the last tree that had any.
    from_nbt: Option<StagedEnchantments>,
    /// Incremented each time enchantments are staged, used to order the two slots.
    stage_count: u32,
}

/// An enchantment list with the order in which it has been staged.
#[derive(Debug, Clone)]
struct StagedEnchantments {
    enchantments: Vec<Enchantment>,
    stage: u32,
}

impl ItemStackBuilder {

    pub fn new() -> Self {
        Self {
            ty: &AIR,
            amount: 1,
            nbt: None,
            legacy_data: -1,
            explicit: None,
            from_nbt: None,
            stage_count: 0,
        }
    }

    #[inline]
    pub fn ty(mut self, ty: &'static ItemType) -> Self {
        self.ty = ty;
        self
    }

    #[inline]
    pub fn amount(mut self, amount: i32) -> Self {
        self.amount = amount;
        self
    }

    /// Set the attribute tree of the stack, if it contains known enchantments they
    /// replace any previously staged enchantments.
    pub fn nbt(mut self, nbt: NbtCompound) -> Self {
        let enchantments = read_enchantments(Some(&nbt));
        if !enchantments.is_empty() {
            let stage = self.next_stage();
            self.from_nbt = Some(StagedEnchantments { enchantments, stage });
        }
        self.nbt = Some(nbt);
        self
    }

    #[inline]
    pub fn legacy_data(mut self, legacy_data: i32) -> Self {
        self.legacy_data = legacy_data;
        self
    }

    /// Stage the given enchantments, replacing any previously staged enchantments.
    ///
    /// Note that the built stack will have a tree even if none is given.
    pub fn enchantments(mut self, enchantments: impl Into<Vec<Enchantment>>) -> Self {
        let stage = self.next_stage();
        self.explicit = Some(StagedEnchantments { enchantments: enchantments.into(), stage });
        self
    }

    /// Append an enchantment to the currently staged enchantments, or stage a new list
    /// if nothing is staged yet.
    pub fn add_enchantment(mut self, enchantment: Enchantment) -> Self {
        match self.latest_mut() {
            Some(staged) => staged.enchantments.push(enchantment),
            None => {
                let stage = self.next_stage();
                self.explicit = Some(StagedEnchantments { enchantments: vec![enchantment], stage });
            }
        }
        self
    }

    pub fn build(self) -> ItemStack {

        let staged = match (self.explicit, self.from_nbt) {
            (Some(explicit), Some(from_nbt)) => {
                if from_nbt.stage > explicit.stage {
                    debug!("tree enchantments override explicit enchantments");
                    Some(from_nbt)
                } else {
                    Some(explicit)
                }
            }
            (explicit, from_nbt) => explicit.or(from_nbt),
        };

        let mut stack = ItemStack::from_parts(self.ty, self.amount, self.nbt, self.legacy_data);
        if let Some(staged) = staged {
            stack.set_enchantments(&staged.enchantments);
        }

        stack

    }

    #[inline]
    fn next_stage(&mut self) -> u32 {
        self.stage_count += 1;
        self.stage_count
    }

    /// Get the most recently staged enchantment list.
    fn latest_mut(&mut self) -> Option<&mut StagedEnchantments> {
        match (&mut self.explicit, &mut self.from_nbt) {
            (Some(explicit), Some(from_nbt)) => {
                if from_nbt.stage > explicit.stage {
                    Some(from_nbt)
                } else {
                    Some(explicit)
                }
            }
            (Some(explicit), None) => Some(explicit),
            (None, Some(from_nbt)) => Some(from_nbt),
            (None, None) => None,
        }
    }

}

impl Default for ItemStackBuilder {
    fn default() -> Self {
        Self::new()
    }
}
