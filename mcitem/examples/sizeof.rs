//! This example is just used internally to debug structures sizes.

use std::mem::size_of;

pub fn main() {

    println!("mcitem::ItemStack: {}", size_of::<mcitem::ItemStack>());
    println!("mcitem::ItemStackBuilder: {}", size_of::<mcitem::ItemStackBuilder>());
    println!("mcitem::Nbt: {}", size_of::<mcitem::Nbt>());
    println!("mcitem::NbtCompound: {}", size_of::<mcitem::NbtCompound>());
    println!("mcitem::Enchantment: {}", size_of::<mcitem::Enchantment>());

}
