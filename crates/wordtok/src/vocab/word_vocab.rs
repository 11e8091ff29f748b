//! # Bijective ``{ word <-> T }`` Vocabulary

use crate::types::{TokenType, WordToTokenMap, token_from_index, token_to_index};
use compact_str::CompactString;

/// Token vocabulary as a bijective ``{ word <-> T }`` table.
///
/// Ids are contiguous, ``0..len``, in insertion order; the reverse table
/// is a plain ``id -> word`` vector.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVocab<T: TokenType> {
    /// Map of ``{ word -> T }``.
    words: WordToTokenMap<T>,

    /// Words indexed by id.
    id_words: Vec<CompactString>,
}

impl<T: TokenType> Default for WordVocab<T> {
    fn default() -> Self {
        Self {
            words: WordToTokenMap::default(),
            id_words: Vec::new(),
        }
    }
}

impl<T: TokenType> WordVocab<T> {
    /// Build a vocabulary from words in id order.
    ///
    /// Duplicate words keep their first id.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for word in words {
            vocab.insert_word(word.as_ref());
        }
        vocab
    }

    /// The number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.id_words.len()
    }

    /// Returns `true` if the vocabulary contains no words.
    pub fn is_empty(&self) -> bool {
        self.id_words.is_empty()
    }

    /// Remove every word.
    pub fn clear(&mut self) {
        self.words.clear();
        self.id_words.clear();
    }

    /// Append a word at the next id.
    ///
    /// # Returns
    /// * `Some(id)` if the word was added,
    /// * `None` if it was already present, or the next id does not fit `T`.
    pub fn insert_word(
        &mut self,
        word: &str,
    ) -> Option<T> {
        if self.words.contains_key(word) {
            return None;
        }
        let token: T = token_from_index(self.id_words.len())?;
        let word = CompactString::from(word);
        self.words.insert(word.clone(), token);
        self.id_words.push(word);
        Some(token)
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        word: &str,
    ) -> Option<T> {
        self.words.get(word).copied()
    }

    /// Return the associated word for the token, if any.
    pub fn lookup_word(
        &self,
        token: T,
    ) -> Option<&str> {
        token_to_index(token)
            .and_then(|idx| self.id_words.get(idx))
            .map(|word| word.as_str())
    }

    /// Returns `true` if the vocabulary contains the word.
    pub fn contains_word(
        &self,
        word: &str,
    ) -> bool {
        self.words.contains_key(word)
    }

    /// Get the ``{ word -> T }`` map.
    pub fn word_map(&self) -> &WordToTokenMap<T> {
        &self.words
    }

    /// Get the words, indexed by id.
    pub fn id_words(&self) -> &[CompactString] {
        &self.id_words
    }

    /// Iterate over ``(word, T)`` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.id_words
            .iter()
            .zip(self.token_ids())
            .map(|(word, token)| (word.as_str(), token))
    }

    /// Iterate over the ids in ascending order.
    fn token_ids(&self) -> impl Iterator<Item = T> {
        (0..self.id_words.len()).filter_map(token_from_index::<T>)
    }

    /// Returns `true` if the forward and reverse tables agree.
    pub fn is_bijective(&self) -> bool {
        self.words.len() == self.id_words.len()
            && self
                .iter()
                .all(|(word, token)| self.words.get(word) == Some(&token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{check_is_send, check_is_sync};

    #[test]
    fn test_insert_and_lookup() {
        type T = u32;
        let mut vocab = WordVocab::<T>::default();
        check_is_send(&vocab);
        check_is_sync(&vocab);
        assert!(vocab.is_empty());

        assert_eq!(vocab.insert_word("apple"), Some(0));
        assert_eq!(vocab.insert_word("pear"), Some(1));
        assert_eq!(vocab.insert_word("apple"), None);
        assert_eq!(vocab.len(), 2);

        assert_eq!(vocab.lookup_token("pear"), Some(1));
        assert_eq!(vocab.lookup_token("plum"), None);
        assert_eq!(vocab.lookup_word(0), Some("apple"));
        assert_eq!(vocab.lookup_word(2), None);
        assert!(vocab.contains_word("apple"));

        assert_eq!(
            vocab.iter().collect::<Vec<_>>(),
            vec![("apple", 0), ("pear", 1)]
        );
        assert!(vocab.is_bijective());

        vocab.clear();
        assert!(vocab.is_empty());
        assert_eq!(vocab.lookup_token("apple"), None);
    }

    #[test]
    fn test_id_overflow() {
        type T = u8;
        let mut vocab = WordVocab::<T>::from_words((0..256).map(|i| i.to_string()));
        assert_eq!(vocab.len(), 256);
        assert_eq!(vocab.lookup_word(255), Some("255"));

        assert_eq!(vocab.insert_word("overflow"), None);
        assert_eq!(vocab.len(), 256);
        assert!(vocab.is_bijective());
    }

    #[test]
    fn test_from_words_keeps_first_id() {
        let vocab = WordVocab::<u16>::from_words(["a", "b", "a", "c"]);
        let expected: Vec<CompactString> = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(vocab.id_words(), expected.as_slice());
        assert_eq!(vocab.word_map().len(), 3);
    }
}
