//! # Word Tokenizer

pub mod options;
pub mod word_tokenizer;

pub use options::TokenizerOptions;
pub use word_tokenizer::WordTokenizer;
