//! # Vocabulary Statistics

use serde::Serialize;

/// Summary of a tokenizer's vocabulary and its last training call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VocabStats {
    /// Total vocabulary entries, special tokens included.
    pub vocab_size: usize,

    /// The number of special tokens.
    pub special_token_count: usize,

    /// ``vocab_size - special_token_count``.
    pub regular_word_count: usize,

    /// Words seen by the last training call; 0 if never trained.
    pub total_training_words: u64,

    /// Texts seen by the last training call; 0 if never trained.
    pub training_texts: usize,
}
