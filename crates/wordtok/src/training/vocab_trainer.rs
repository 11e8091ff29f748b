//! # Vocab Trainer

use crate::training::word_counter::WordCounter;
use crate::types::{CountType, StringChunkType, TokenType};
use crate::vocab::WordVocab;

/// Outcome of one [`VocabTrainer::train`] call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrainResults {
    /// Distinct words in the frequency table.
    pub distinct_words: usize,

    /// Words assigned a new id.
    pub admitted: usize,

    /// Words already present in the seed vocabulary.
    pub reserved: usize,

    /// Words dropped by the vocabulary cap.
    pub dropped: usize,
}

/// Assigns ids to counted words by descending frequency, under a size cap.
#[derive(Debug, Clone, Copy)]
pub struct VocabTrainer {
    /// Total vocab size cap, seed entries included.
    max_vocab_size: usize,
}

impl VocabTrainer {
    /// Create a trainer with the given total cap.
    pub fn new(max_vocab_size: usize) -> Self {
        Self { max_vocab_size }
    }

    /// The total vocab size cap.
    pub fn max_vocab_size(&self) -> usize {
        self.max_vocab_size
    }

    /// Extend `vocab` with the ranked words of `counter`.
    ///
    /// Words already in `vocab` keep their ids and take no extra slot.
    /// Once `vocab` holds `max_vocab_size` entries, the remaining words
    /// are dropped.
    pub fn train<T, K, C>(
        &self,
        counter: &WordCounter<K, C>,
        vocab: &mut WordVocab<T>,
    ) -> TrainResults
    where
        T: TokenType,
        K: StringChunkType,
        C: CountType,
    {
        let mut results = TrainResults {
            distinct_words: counter.len(),
            ..Default::default()
        };

        for (word, _count) in counter.ranked() {
            if vocab.contains_word(word) {
                results.reserved += 1;
                continue;
            }
            if vocab.len() >= self.max_vocab_size {
                results.dropped += 1;
                continue;
            }
            match vocab.insert_word(word) {
                Some(_) => results.admitted += 1,
                None => results.dropped += 1,
            }
        }

        log::debug!("{results:?}");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(samples: &[&[&str]]) -> WordCounter {
        let mut wc = WordCounter::default();
        for sample in samples {
            wc.update_from_sample(sample.iter());
        }
        wc
    }

    #[test]
    fn test_train_by_frequency() {
        let wc = counter(&[&["a", "a", "a"], &["b", "b"], &["c"]]);

        let mut vocab = WordVocab::<u32>::from_words(["<unk>"]);
        let results = VocabTrainer::new(3).train(&wc, &mut vocab);

        assert_eq!(
            results,
            TrainResults {
                distinct_words: 3,
                admitted: 2,
                reserved: 0,
                dropped: 1,
            }
        );
        assert_eq!(
            vocab.iter().collect::<Vec<_>>(),
            vec![("<unk>", 0), ("a", 1), ("b", 2)]
        );
    }

    #[test]
    fn test_seed_words_take_no_slot() {
        let wc = counter(&[&["<unk>", "<unk>", "x", "y"]]);

        let mut vocab = WordVocab::<u32>::from_words(["<unk>"]);
        let results = VocabTrainer::new(3).train(&wc, &mut vocab);

        assert_eq!(results.reserved, 1);
        assert_eq!(results.admitted, 2);
        assert_eq!(results.dropped, 0);
        assert_eq!(vocab.lookup_token("<unk>"), Some(0));
        assert_eq!(vocab.lookup_token("x"), Some(1));
        assert_eq!(vocab.lookup_token("y"), Some(2));
    }

    #[test]
    fn test_full_seed_drops_everything() {
        let wc = counter(&[&["x", "y"]]);

        let mut vocab = WordVocab::<u32>::from_words(["<unk>", "<pad>"]);
        let results = VocabTrainer::new(2).train(&wc, &mut vocab);

        assert_eq!(results.admitted, 0);
        assert_eq!(results.dropped, 2);
        assert_eq!(vocab.len(), 2);
    }
}
