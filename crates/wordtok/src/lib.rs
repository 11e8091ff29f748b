//! # Word-Level Vocabulary Tokenizer
//!
//! Learns a finite ``{ word <-> id }`` mapping from a training corpus,
//! then converts text to id sequences and back.
//!
//! * special tokens always hold the lowest ids, ``0..k``;
//! * regular words follow, ranked by descending training frequency,
//!   ties broken by first-seen order;
//! * out-of-vocabulary words encode to the unknown-token id,
//!   and unknown ids decode to the unknown-token string.
//!
//! # Example
//!
//! ```rust
//! use wordtok::tokenizer::{TokenizerOptions, WordTokenizer};
//!
//! let mut tokenizer = WordTokenizer::<u32>::new(TokenizerOptions::new(10))
//!     .expect("4 specials fit in 10 slots");
//! tokenizer.learn_vocab(["the cat sat"]);
//!
//! let ids = tokenizer.encode("The cat sat!");
//! assert_eq!(tokenizer.decode(&ids), "the cat sat");
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod normalization;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

pub use errors::{Result, VocabConfigError};
pub use tokenizer::{TokenizerOptions, WordTokenizer};

/// Vocabulary cap used when none is configured.
pub const DEFAULT_MAX_VOCAB_SIZE: usize = 1000;
