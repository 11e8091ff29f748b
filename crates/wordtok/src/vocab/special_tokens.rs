//! # Special Tokens
//!
//! An ordered ``{ name -> string }`` set of structural markers.
//!
//! The defaults, in id order, are [`UNK`], [`PAD`], [`START`], [`END`].
//! Overrides merge into the defaults: an existing name keeps its slot and
//! takes the new string, a new name is appended. Names are never removed,
//! so the default slots are stable.

use crate::errors::{Result, VocabConfigError};
use ahash::AHashMap;
use compact_str::CompactString;
use serde::Serialize;

/// Unknown word marker name.
pub const UNK: &str = "UNK";
/// Padding marker name.
pub const PAD: &str = "PAD";
/// Sequence-start marker name.
pub const START: &str = "START";
/// Sequence-end marker name.
pub const END: &str = "END";

/// Default ``(name, string)`` special tokens, in id order.
pub const DEFAULT_SPECIAL_TOKENS: [(&str, &str); 4] = [
    (UNK, "<unk>"),
    (PAD, "<pad>"),
    (START, "<start>"),
    (END, "<end>"),
];

/// Slot of [`UNK`].
pub const UNK_INDEX: usize = 0;
/// Slot of [`PAD`].
pub const PAD_INDEX: usize = 1;
/// Slot of [`START`].
pub const START_INDEX: usize = 2;
/// Slot of [`END`].
pub const END_INDEX: usize = 3;

/// Ordered named special tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialTokens {
    entries: Vec<(CompactString, CompactString)>,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SPECIAL_TOKENS
                .iter()
                .map(|&(name, token)| (name.into(), token.into()))
                .collect(),
        }
    }
}

impl SpecialTokens {
    /// The number of special tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; the default names are never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over ``(name, string)`` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, token)| (name.as_str(), token.as_str()))
    }

    /// Iterate over names in slot order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    /// Iterate over token strings in slot order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(_, token)| token)
    }

    /// The slot of the named special token, if any.
    pub fn position(
        &self,
        name: &str,
    ) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n.as_str() == name)
    }

    /// The string of the named special token, if any.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.position(name).map(|idx| self.entries[idx].1.as_str())
    }

    /// The string at a slot.
    fn slot(
        &self,
        index: usize,
    ) -> &str {
        self.entries[index].1.as_str()
    }

    /// The unknown word marker string.
    pub fn unk_token(&self) -> &str {
        self.slot(UNK_INDEX)
    }

    /// The padding marker string.
    pub fn pad_token(&self) -> &str {
        self.slot(PAD_INDEX)
    }

    /// The sequence-start marker string.
    pub fn start_token(&self) -> &str {
        self.slot(START_INDEX)
    }

    /// The sequence-end marker string.
    pub fn end_token(&self) -> &str {
        self.slot(END_INDEX)
    }

    /// Returns `true` if `token` is one of the special token strings.
    pub fn contains_token(
        &self,
        token: &str,
    ) -> bool {
        self.entries.iter().any(|(_, t)| t.as_str() == token)
    }

    /// Set the string for a name; replaces in place, or appends a new slot.
    pub fn set_token(
        &mut self,
        name: &str,
        token: &str,
    ) {
        match self.position(name) {
            Some(idx) => self.entries[idx].1 = token.into(),
            None => self.entries.push((name.into(), token.into())),
        }
    }

    /// Builder form of [`Self::set_token`].
    pub fn with_token(
        self,
        name: &str,
        token: &str,
    ) -> Self {
        let mut specials = self;
        specials.set_token(name, token);
        specials
    }

    /// Merge all of the given ``(name, string)`` overrides.
    pub fn with_overrides<W, N, S>(
        self,
        overrides: W,
    ) -> Self
    where
        W: IntoIterator<Item = (N, S)>,
        N: AsRef<str>,
        S: AsRef<str>,
    {
        let mut specials = self;
        for (name, token) in overrides {
            specials.set_token(name.as_ref(), token.as_ref());
        }
        specials
    }

    /// Check that every string is non-empty and distinct.
    pub fn try_validate(&self) -> Result<()> {
        let mut seen: AHashMap<&str, &str> = AHashMap::with_capacity(self.len());
        for (name, token) in self.iter() {
            if token.is_empty() {
                return Err(VocabConfigError::EmptySpecialToken {
                    name: name.to_string(),
                });
            }
            if let Some(first) = seen.insert(token, name) {
                return Err(VocabConfigError::DuplicateSpecialToken {
                    first: first.to_string(),
                    second: name.to_string(),
                    token: token.to_string(),
                });
            }
        }
        Ok(())
    }
}
