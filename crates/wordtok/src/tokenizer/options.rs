//! # Tokenizer Options

use crate::errors::{Result, VocabConfigError};
use crate::types::{TokenType, token_from_index};
use crate::vocab::SpecialTokens;
use serde::Serialize;

/// Options for [`crate::WordTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenizerOptions {
    /// Total vocab size cap, special tokens included.
    pub max_vocab_size: usize,

    /// The special tokens; always assigned ids ``0..specials.len()``.
    pub specials: SpecialTokens,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self::new(crate::DEFAULT_MAX_VOCAB_SIZE)
    }
}

impl TokenizerOptions {
    /// Create new options with the default special tokens.
    pub fn new(max_vocab_size: usize) -> Self {
        Self {
            max_vocab_size,
            specials: SpecialTokens::default(),
        }
    }

    /// Sets the vocab size cap.
    ///
    /// # Arguments
    /// * `max_vocab_size` - the total cap; must be >= the number of special tokens.
    pub fn with_max_vocab_size(
        self,
        max_vocab_size: usize,
    ) -> Self {
        Self {
            max_vocab_size,
            ..self
        }
    }

    /// Replace the special tokens.
    pub fn with_specials(
        self,
        specials: SpecialTokens,
    ) -> Self {
        Self { specials, ..self }
    }

    /// Override (or add) one named special token.
    pub fn with_special_token(
        self,
        name: &str,
        token: &str,
    ) -> Self {
        Self {
            specials: self.specials.with_token(name, token),
            ..self
        }
    }

    /// Validate the options for the token id type `T`.
    pub fn try_validate<T: TokenType>(&self) -> Result<()> {
        self.specials.try_validate()?;

        let special_count = self.specials.len();
        if self.max_vocab_size < special_count {
            return Err(VocabConfigError::VocabTooSmall {
                max_vocab_size: self.max_vocab_size,
                special_count,
            });
        }

        // The largest id handed out is `max_vocab_size - 1`.
        if token_from_index::<T>(self.max_vocab_size.saturating_sub(1)).is_none() {
            return Err(VocabConfigError::IdOverflow {
                max_vocab_size: self.max_vocab_size,
                id_type: core::any::type_name::<T>(),
            });
        }

        Ok(())
    }
}
