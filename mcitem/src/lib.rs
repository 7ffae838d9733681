//! Minecraft item stacks whose damage, unbreakability and enchantments are stored in
//! an NBT attribute tree.

pub mod config;

pub mod id;
pub mod nbt;

pub mod item;
pub mod enchantment;

pub use item::{ItemStack, ItemStackBuilder, ItemType};
pub use enchantment::{Enchantment, EnchantmentType};
pub use nbt::{Nbt, NbtCompound};
