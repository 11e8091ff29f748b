//! # Vocabulary

pub mod special_tokens;
pub mod token_info;
pub mod vocab_stats;
pub mod word_vocab;

pub use special_tokens::SpecialTokens;
pub use token_info::TokenInfo;
pub use vocab_stats::VocabStats;
pub use word_vocab::WordVocab;
