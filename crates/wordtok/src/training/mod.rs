//! # Vocabulary Training

pub mod vocab_trainer;
pub mod word_counter;

pub use vocab_trainer::{TrainResults, VocabTrainer};
pub use word_counter::WordCounter;
