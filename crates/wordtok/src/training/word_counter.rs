//! # Word Frequency Counting
//!
//! Counts are kept in first-seen order, so ranking can break frequency
//! ties by discovery order with a stable sort.

use crate::types::{CountType, StringChunkType};
use ahash::AHashMap;
use compact_str::CompactString;

/// Ordered word frequency table.
///
/// # Parameters
/// * `K` - the type used to store words.
/// * `C` - the type used to store counts.
#[derive(Debug, Clone)]
pub struct WordCounter<K = CompactString, C = u64>
where
    K: StringChunkType,
    C: CountType,
{
    /// Map of ``{ word -> index into counts }``.
    index: AHashMap<K, usize>,

    /// ``(word, count)`` in first-seen order.
    counts: Vec<(K, C)>,

    /// Sum of all counts.
    total: C,

    /// The number of samples counted.
    samples: usize,
}

impl<K, C> Default for WordCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    fn default() -> Self {
        Self {
            index: AHashMap::new(),
            counts: Vec::new(),
            total: C::zero(),
            samples: 0,
        }
    }
}

impl<K, C> WordCounter<K, C>
where
    K: StringChunkType,
    C: CountType,
{
    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no words have been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all word counts.
    pub fn total_count(&self) -> C {
        self.total
    }

    /// The number of samples counted.
    pub fn sample_count(&self) -> usize {
        self.samples
    }

    /// Reset all counts.
    pub fn clear(&mut self) {
        self.index.clear();
        self.counts.clear();
        self.total = C::zero();
        self.samples = 0;
    }

    /// Count one occurrence of a word.
    pub fn add_word(
        &mut self,
        word: &str,
    ) {
        let key: K = word.into();
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                self.index.insert(key.clone(), self.counts.len());
                self.counts.push((key, C::zero()));
                self.counts.len() - 1
            }
        };
        self.counts[idx].1 += C::one();
        self.total += C::one();
    }

    /// Count every word of one sample.
    pub fn update_from_sample<I, S>(
        &mut self,
        words: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
        self.samples += 1;
    }

    /// The count for a word, if seen.
    pub fn count(
        &self,
        word: &str,
    ) -> Option<C> {
        let key: K = word.into();
        self.index.get(&key).map(|&idx| self.counts[idx].1)
    }

    /// Iterate over ``(word, count)`` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, C)> {
        self.counts
            .iter()
            .map(|(word, count)| (word.as_ref(), *count))
    }

    /// ``(word, count)`` by descending count; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, C)> {
        let mut ranked: Vec<(&str, C)> = self.iter().collect();
        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
