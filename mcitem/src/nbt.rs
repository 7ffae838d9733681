//! In-memory NBT tree used as the attribute storage of item stacks.
//!
//! Every typed accessor returns `None` when the key is missing or when the stored tag
//! is of another type, this is what allows item stacks to read trees written by other
//! versions of the format without failing.

use std::fmt;

use indexmap::IndexMap;


/// A generic NBT tag.
///
/// Floating point tags are equal when their bits are equal, so a NaN tag equals
/// itself and any tree can be compared with its copy.
#[derive(Clone)]
pub enum Nbt {
    // Primitive tags.
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(String),
    // List tags, a list can only contain a single type of tag.
    ListByte(Vec<i8>),
    ListShort(Vec<i16>),
    ListInt(Vec<i32>),
    ListLong(Vec<i64>),
    ListFloat(Vec<f32>),
    ListDouble(Vec<f64>),
    ListString(Vec<String>),
    ListCompound(Vec<NbtCompound>),
    // Compound tag.
    Compound(NbtCompound),
}

/// An abstract NBT compound type that hides the internal implementation of the mapping.
///
/// Keys keep their insertion order, but two compounds are equal as soon as they have
/// the same keys mapped to equal tags, regardless of that order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NbtCompound {
    inner: IndexMap<String, Nbt>,
}


/// Basic methods to interpret a tag as its inner type if possible.
impl Nbt {

    #[inline]
    pub fn as_boolean(&self) -> Option<bool> {
        self.as_byte().map(|b| b != 0)
    }

    #[inline]
    pub fn as_byte(&self) -> Option<i8> {
        match *self {
            Self::Byte(n) => Some(n),
            _ => None
        }
    }

    #[inline]
    pub fn as_short(&self) -> Option<i16> {
        match *self {
            Self::Short(n) => Some(n),
            _ => None
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i32> {
        match *self {
            Self::Int(n) => Some(n),
            _ => None
        }
    }

    #[inline]
    pub fn as_long(&self) -> Option<i64> {
        match *self {
            Self::Long(n) => Some(n),
            _ => None
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match *self {
            Self::Float(n) => Some(n),
            _ => None
        }
    }

    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match *self {
            Self::Double(n) => Some(n),
            _ => None
        }
    }

    #[inline]
    pub fn as_byte_array(&self) -> Option<&[u8]> {
        match self {
            Self::ByteArray(buf) => Some(&buf[..]),
            _ => None
        }
    }

    #[inline]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(string.as_str()),
            _ => None
        }
    }

    #[inline]
    pub fn as_compound_list(&self) -> Option<&[NbtCompound]> {
        match self {
            Self::ListCompound(list) => Some(&list[..]),
            _ => None
        }
    }

    #[inline]
    pub fn as_compound_list_mut(&mut self) -> Option<&mut Vec<NbtCompound>> {
        match self {
            Self::ListCompound(list) => Some(list),
            _ => None
        }
    }

    #[inline]
    pub fn as_compound(&self) -> Option<&NbtCompound> {
        match self {
            Self::Compound(comp) => Some(comp),
            _ => None
        }
    }

    #[inline]
    pub fn as_compound_mut(&mut self) -> Option<&mut NbtCompound> {
        match self {
            Self::Compound(comp) => Some(comp),
            _ => None
        }
    }

    /// Return the number of elements if this tag is a list of any type.
    pub fn list_len(&self) -> Option<usize> {
        Some(match self {
            Self::ListByte(list) => list.len(),
            Self::ListShort(list) => list.len(),
            Self::ListInt(list) => list.len(),
            Self::ListLong(list) => list.len(),
            Self::ListFloat(list) => list.len(),
            Self::ListDouble(list) => list.len(),
            Self::ListString(list) => list.len(),
            Self::ListCompound(list) => list.len(),
            _ => return None,
        })
    }

}

/// Basic methods to create and manage keys in a compound.
impl NbtCompound {

    pub fn new() -> Self {
        Self { inner: IndexMap::new() }
    }

    /// Insert a tag at the given key, returning the tag previously mapped to it. A
    /// replaced key keeps its original position.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, tag: impl Into<Nbt>) -> Option<Nbt> {
        self.inner.insert(key.into(), tag.into())
    }

    /// Remove the tag at the given key, the order of the remaining keys is kept.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Nbt> {
        self.inner.shift_remove(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over the tag names, in insertion order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.keys().map(String::as_str)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Nbt)> + '_ {
        self.inner.iter().map(|(key, tag)| (key.as_str(), tag))
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Nbt> {
        self.inner.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Nbt> {
        self.inner.get_mut(key)
    }

    #[inline]
    pub fn get_boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Nbt::as_boolean)
    }

    #[inline]
    pub fn get_byte(&self, key: &str) -> Option<i8> {
        self.get(key).and_then(Nbt::as_byte)
    }

    #[inline]
    pub fn get_short(&self, key: &str) -> Option<i16> {
        self.get(key).and_then(Nbt::as_short)
    }

    #[inline]
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.get(key).and_then(Nbt::as_int)
    }

    #[inline]
    pub fn get_long(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Nbt::as_long)
    }

    #[inline]
    pub fn get_float(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(Nbt::as_float)
    }

    #[inline]
    pub fn get_double(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Nbt::as_double)
    }

    #[inline]
    pub fn get_byte_array(&self, key: &str) -> Option<&[u8]> {
        self.get(key).and_then(Nbt::as_byte_array)
    }

    #[inline]
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Nbt::as_string)
    }

    #[inline]
    pub fn get_compound_list(&self, key: &str) -> Option<&[NbtCompound]> {
        self.get(key).and_then(Nbt::as_compound_list)
    }

    #[inline]
    pub fn get_compound_list_mut(&mut self, key: &str) -> Option<&mut Vec<NbtCompound>> {
        self.get_mut(key).and_then(Nbt::as_compound_list_mut)
    }

    #[inline]
    pub fn get_compound(&self, key: &str) -> Option<&NbtCompound> {
        self.get(key).and_then(Nbt::as_compound)
    }

    #[inline]
    pub fn get_compound_mut(&mut self, key: &str) -> Option<&mut NbtCompound> {
        self.get_mut(key).and_then(Nbt::as_compound_mut)
    }

}


macro_rules! impl_from {
    ( $($ty:ty => $variant:ident),* $(,)? ) => {
        $(impl From<$ty> for Nbt {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        })*
    };
}

impl_from! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<u8> => ByteArray,
    String => String,
    Vec<i8> => ListByte,
    Vec<i16> => ListShort,
    Vec<i32> => ListInt,
    Vec<i64> => ListLong,
    Vec<f32> => ListFloat,
    Vec<f64> => ListDouble,
    Vec<String> => ListString,
    Vec<NbtCompound> => ListCompound,
    NbtCompound => Compound,
}

impl From<bool> for Nbt {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Byte(value as i8)
    }
}

impl From<&str> for Nbt {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}


impl PartialEq for Nbt {
    fn eq(&self, other: &Self) -> bool {

        fn bits_eq<T: Copy, B: PartialEq>(left: &[T], right: &[T], bits: impl Fn(T) -> B) -> bool {
            left.len() == right.len() && left.iter().zip(right).all(|(&l, &r)| bits(l) == bits(r))
        }

        match (self, other) {
            (Self::Byte(l), Self::Byte(r)) => l == r,
            (Self::Short(l), Self::Short(r)) => l == r,
            (Self::Int(l), Self::Int(r)) => l == r,
            (Self::Long(l), Self::Long(r)) => l == r,
            (Self::Float(l), Self::Float(r)) => l.to_bits() == r.to_bits(),
            (Self::Double(l), Self::Double(r)) => l.to_bits() == r.to_bits(),
            (Self::ByteArray(l), Self::ByteArray(r)) => l == r,
            (Self::String(l), Self::String(r)) => l == r,
            (Self::ListByte(l), Self::ListByte(r)) => l == r,
            (Self::ListShort(l), Self::ListShort(r)) => l == r,
            (Self::ListInt(l), Self::ListInt(r)) => l == r,
            (Self::ListLong(l), Self::ListLong(r)) => l == r,
            (Self::ListFloat(l), Self::ListFloat(r)) => bits_eq(l, r, f32::to_bits),
            (Self::ListDouble(l), Self::ListDouble(r)) => bits_eq(l, r, f64::to_bits),
            (Self::ListString(l), Self::ListString(r)) => l == r,
            (Self::ListCompound(l), Self::ListCompound(r)) => l == r,
            (Self::Compound(l), Self::Compound(r)) => l == r,
            _ => false,
        }

    }
}

impl Eq for Nbt {}


/// Manual debug implement to shrink the potential huge byte arrays.
impl fmt::Debug for Nbt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(n) => f.debug_tuple("Byte").field(n).finish(),
            Self::Short(n) => f.debug_tuple("Short").field(n).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Long(n) => f.debug_tuple("Long").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Double(n) => f.debug_tuple("Double").field(n).finish(),
            Self::ByteArray(buf) => {
                f.debug_tuple("ByteArray")
                    .field(&format_args!("({}) {:X?}...", buf.len(), &buf[..buf.len().min(10)]))
                    .finish()
            }
            Self::String(string) => f.debug_tuple("String").field(string).finish(),
            Self::ListByte(list) => f.debug_tuple("ListByte").field(list).finish(),
            Self::ListShort(list) => f.debug_tuple("ListShort").field(list).finish(),
            Self::ListInt(list) => f.debug_tuple("ListInt").field(list).finish(),
            Self::ListLong(list) => f.debug_tuple("ListLong").field(list).finish(),
            Self::ListFloat(list) => f.debug_tuple("ListFloat").field(list).finish(),
            Self::ListDouble(list) => f.debug_tuple("ListDouble").field(list).finish(),
            Self::ListString(list) => f.debug_tuple("ListString").field(list).finish(),
            Self::ListCompound(list) => f.debug_tuple("ListCompound").field(list).finish(),
            Self::Compound(compound) => f.debug_tuple("Compound").field(compound).finish(),
        }
    }
}

impl fmt::Debug for NbtCompound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}
