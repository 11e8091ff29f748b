//! # Text Normalization
//!
//! Training and encoding share one normalization, so the same text
//! always yields the same word sequence:
//!
//! 1. lower-case the input;
//! 2. split each punctuation mark in [`PUNCTUATION`] into its own word;
//! 3. split on runs of whitespace, dropping empty fragments.
//!
//! Decoding reverses step 2 with [`join_words`].

pub mod text_normalizer;

pub use text_normalizer::{TextNormalizer, is_punctuation_word, join_words};

/// Punctuation marks which always become standalone words.
pub const PUNCTUATION: [char; 8] = ['.', '!', '?', ',', ':', ';', '(', ')'];
