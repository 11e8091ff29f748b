//! # Configuration Errors
//!
//! Only tokenizer construction can fail. Training, encoding and decoding
//! are total over all inputs; unknown words and ids resolve to the
//! unknown token instead of erroring.

use thiserror::Error;

/// Invalid [`crate::TokenizerOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabConfigError {
    /// The vocabulary cap cannot hold every special token.
    #[error("max_vocab_size {max_vocab_size} cannot hold {special_count} special tokens")]
    VocabTooSmall {
        /// The configured cap.
        max_vocab_size: usize,
        /// The number of special tokens.
        special_count: usize,
    },

    /// The largest id under the cap does not fit the token id type.
    #[error("max_vocab_size {max_vocab_size} exceeds the id range of {id_type}")]
    IdOverflow {
        /// The configured cap.
        max_vocab_size: usize,
        /// The token id type name.
        id_type: &'static str,
    },

    /// A special token maps to the empty string.
    #[error("special token {name:?} has an empty string")]
    EmptySpecialToken {
        /// The special token name.
        name: String,
    },

    /// Two special token names map to the same string.
    #[error("special tokens {first:?} and {second:?} share the string {token:?}")]
    DuplicateSpecialToken {
        /// The first name holding the string.
        first: String,
        /// The second name holding the string.
        second: String,
        /// The shared string.
        token: String,
    },
}

/// Result type for tokenizer configuration.
pub type Result<T> = core::result::Result<T, VocabConfigError>;
