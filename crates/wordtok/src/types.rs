//! # Common Types and Traits
use compact_str::CompactString;
use core::hash::Hash;
use num_traits::{FromPrimitive, Num, ToPrimitive, Unsigned};
use std::fmt::{Debug, Display};
use std::ops::AddAssign;

/// A type that can be used as a vocabulary token id.
pub trait TokenType:
    'static
    + Default
    + Debug
    + Display
    + Clone
    + Copy
    + Hash
    + Send
    + Sync
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + Ord
    + serde::Serialize
    + for<'de> serde::Deserialize<'de>
{
}

impl<T> TokenType for T where
    T: 'static
        + Default
        + Debug
        + Display
        + Clone
        + Copy
        + Hash
        + Send
        + Sync
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + Ord
        + serde::Serialize
        + for<'de> serde::Deserialize<'de>
{
}

/// A type that can be used as a word count.
pub trait CountType:
    Num + AddAssign + Default + Copy + Debug + Display + Send + Sync + Hash + Ord + ToPrimitive
{
}

impl<T> CountType for T where
    T: Num + AddAssign + Default + Copy + Debug + Display + Send + Sync + Hash + Ord + ToPrimitive
{
}

/// A type that can be used as a string key.
pub trait StringChunkType:
    for<'a> From<&'a str> + AsRef<str> + Debug + Clone + Send + Sync + Eq + Hash + Ord
{
}

impl<T> StringChunkType for T where
    T: for<'a> From<&'a str> + AsRef<str> + Debug + Clone + Send + Sync + Eq + Hash + Ord
{
}

/// Word to T map.
pub type WordToTokenMap<T> = ahash::AHashMap<CompactString, T>;

/// Convert a `usize` position into a token id, if representable.
pub fn token_from_index<T: TokenType>(index: usize) -> Option<T> {
    T::from_usize(index)
}

/// Convert a token id into a `usize` position, if representable.
pub fn token_to_index<T: TokenType>(token: T) -> Option<usize> {
    token.to_usize()
}

/// Check if a type is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: S) {}

#[cfg(test)]
/// Check if a type is `Sync`.
pub(crate) fn check_is_sync<S: Sync>(_: S) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_index_conversion() {
        assert_eq!(token_from_index::<u8>(255), Some(255_u8));
        assert_eq!(token_from_index::<u8>(256), None);
        assert_eq!(token_from_index::<u16>(256), Some(256_u16));

        assert_eq!(token_to_index(7_u32), Some(7));
        assert_eq!(token_to_index(u64::MAX), u64::MAX.to_usize());
    }
}
