//! Keys accepted by the filter and their byte representation
//!
//! Integers are encoded little-endian, which is what Guava's `Funnels.integerFunnel()`
//! and `Funnels.longFunnel()` feed to the hasher. Text and byte keys are hashed
//! as-is (`Funnels.stringFunnel(UTF_8)` / `Funnels.byteArrayFunnel()`).

use std::borrow::Cow;

/// A key that can be put into or looked up in a [`BloomFilter`](super::BloomFilter)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key<'a> {
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    /// Machine-width integer: 4 bytes when it fits in `i32`, 8 bytes otherwise
    Int(isize),
    Str(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> Key<'a> {
    /// Byte representation fed to the hash function
    ///
    /// Empty text or byte keys produce an empty representation. The filter treats
    /// those as unsupported: `put` and `might_contain` log a warning and return
    /// `false` without touching any bit.
    pub fn to_bytes(&self) -> Cow<'a, [u8]> {
        match *self {
            Key::I32(v) => Cow::Owned(v.to_le_bytes().to_vec()),
            Key::U32(v) => Cow::Owned(v.to_le_bytes().to_vec()),
            Key::I64(v) => Cow::Owned(v.to_le_bytes().to_vec()),
            Key::U64(v) => Cow::Owned(v.to_le_bytes().to_vec()),
            Key::Int(v) => match i32::try_from(v) {
                Ok(narrow) => Cow::Owned(narrow.to_le_bytes().to_vec()),
                Err(_) => Cow::Owned((v as i64).to_le_bytes().to_vec()),
            },
            Key::Str(s) => Cow::Borrowed(s.as_bytes()),
            Key::Bytes(b) => Cow::Borrowed(b),
        }
    }
}

macro_rules! impl_key_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Key<'_> {
                fn from(value: $ty) -> Self {
                    Key::$variant(value)
                }
            }
        )*
    };
}

impl_key_from!(i32 => I32, u32 => U32, i64 => I64, u64 => U64, isize => Int);

impl<'a> From<&'a str> for Key<'a> {
    fn from(value: &'a str) -> Self {
        Key::Str(value)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(value: &'a String) -> Self {
        Key::Str(value.as_str())
    }
}

impl<'a> From<&'a [u8]> for Key<'a> {
    fn from(value: &'a [u8]) -> Self {
        Key::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Key<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Key::Bytes(value.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for Key<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Key::Bytes(value.as_slice())
    }
}
