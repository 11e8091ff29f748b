//! # Word Tokenizer
//!
//! [`WordTokenizer`] owns the whole vocabulary state: options, normalizer,
//! the bijective vocabulary, and the frequency table of the last training
//! call.
//!
//! `learn_vocab` takes `&mut self`; `encode`, `decode` and the accessors
//! take `&self`. Embedding hosts that share one tokenizer between threads
//! must serialize training against readers (e.g. an `RwLock`).
//!
//! # Sequence Markers
//!
//! `encode` always wraps its output as ``[START, ..words.., END]``;
//! `decode` always drops every special token, markers and `UNK` included,
//! and re-attaches punctuation to the preceding word.

use crate::errors::{Result, VocabConfigError};
use crate::normalization::{TextNormalizer, join_words};
use crate::tokenizer::options::TokenizerOptions;
use crate::training::{VocabTrainer, WordCounter};
use crate::types::{TokenType, WordToTokenMap, token_from_index, token_to_index};
use crate::vocab::special_tokens::{END_INDEX, PAD_INDEX, START_INDEX, UNK_INDEX};
use crate::vocab::{SpecialTokens, TokenInfo, VocabStats, WordVocab};
use compact_str::CompactString;

/// Word-level vocabulary tokenizer.
///
/// # Parameters
/// * `T` - the token id type.
#[derive(Debug, Clone)]
pub struct WordTokenizer<T: TokenType = u32> {
    options: TokenizerOptions,
    normalizer: TextNormalizer,
    vocab: WordVocab<T>,
    word_counts: WordCounter,

    unk_id: T,
    pad_id: T,
    start_id: T,
    end_id: T,
}

impl<T: TokenType> WordTokenizer<T> {
    /// Create a tokenizer holding only the special tokens.
    ///
    /// # Errors
    /// [`VocabConfigError`] if the options are invalid for `T`.
    pub fn new(options: TokenizerOptions) -> Result<Self> {
        options.try_validate::<T>()?;

        let slot_id = |index: usize| {
            token_from_index::<T>(index).ok_or(VocabConfigError::IdOverflow {
                max_vocab_size: options.max_vocab_size,
                id_type: core::any::type_name::<T>(),
            })
        };
        let unk_id = slot_id(UNK_INDEX)?;
        let pad_id = slot_id(PAD_INDEX)?;
        let start_id = slot_id(START_INDEX)?;
        let end_id = slot_id(END_INDEX)?;

        let vocab = WordVocab::from_words(options.specials.tokens());

        Ok(Self {
            options,
            normalizer: TextNormalizer::new(),
            vocab,
            word_counts: WordCounter::default(),
            unk_id,
            pad_id,
            start_id,
            end_id,
        })
    }

    /// Create a tokenizer with default special tokens and the given cap.
    pub fn with_max_vocab_size(max_vocab_size: usize) -> Result<Self> {
        Self::new(TokenizerOptions::new(max_vocab_size))
    }

    /// Get the tokenizer options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Get the special tokens.
    pub fn specials(&self) -> &SpecialTokens {
        &self.options.specials
    }

    /// Get the normalizer.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// The unknown-token id.
    pub fn unk_id(&self) -> T {
        self.unk_id
    }

    /// The padding-token id.
    pub fn pad_id(&self) -> T {
        self.pad_id
    }

    /// The sequence-start id.
    pub fn start_id(&self) -> T {
        self.start_id
    }

    /// The sequence-end id.
    pub fn end_id(&self) -> T {
        self.end_id
    }

    /// Returns `true` if the token string is a special token.
    pub fn is_special(
        &self,
        token: &str,
    ) -> bool {
        self.options.specials.contains_token(token)
    }

    /// Returns `true` if the id belongs to a special token.
    pub fn is_special_id(
        &self,
        id: T,
    ) -> bool {
        token_to_index(id).is_some_and(|idx| idx < self.options.specials.len())
    }

    /// Learn a fresh vocabulary from training texts.
    ///
    /// Replaces the previous regular words and frequency table; nothing
    /// is merged across calls. Special tokens keep ids ``0..k``; regular
    /// words follow by descending frequency, ties in first-seen order,
    /// until `max_vocab_size` entries are held.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, texts)))]
    pub fn learn_vocab<I, S>(
        &mut self,
        texts: I,
    ) where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut word_counts = WordCounter::default();
        let mut words = Vec::new();
        for text in texts {
            words.clear();
            self.normalizer.normalize_append(text.as_ref(), &mut words);
            word_counts.update_from_sample(&words);
        }

        log::info!(
            "Learning vocab: {} texts, {} words, {} distinct",
            word_counts.sample_count(),
            word_counts.total_count(),
            word_counts.len()
        );

        let mut vocab = WordVocab::from_words(self.options.specials.tokens());
        let results =
            VocabTrainer::new(self.options.max_vocab_size).train(&word_counts, &mut vocab);
        debug_assert!(vocab.is_bijective());

        log::info!(
            "Learned vocab: {} entries, {} words admitted, {} dropped by cap",
            vocab.len(),
            results.admitted,
            results.dropped
        );

        self.vocab = vocab;
        self.word_counts = word_counts;
    }

    /// Normalize text into its word sequence.
    pub fn tokenize<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<String> {
        self.normalizer
            .normalize(text)
            .into_iter()
            .map(|word| word.to_string())
            .collect()
    }

    /// Encode text into ``[START, ..word ids.., END]``.
    ///
    /// Out-of-vocabulary words encode to [`Self::unk_id`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<T> {
        let words = self.normalizer.normalize(text);

        let mut tokens = Vec::with_capacity(words.len() + 2);
        tokens.push(self.start_id);
        tokens.extend(
            words
                .iter()
                .map(|word| self.vocab.lookup_token(word).unwrap_or(self.unk_id)),
        );
        tokens.push(self.end_id);
        tokens
    }

    /// Encode a batch of text into tokens.
    pub fn encode_batch<S: AsRef<str>>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|s| self.encode(s)).collect()
    }

    /// Decode ids into text.
    ///
    /// Unknown ids resolve to the unknown token; all special tokens are
    /// dropped; punctuation attaches to the preceding word.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    pub fn decode<S: AsRef<[T]>>(
        &self,
        tokens: S,
    ) -> String {
        join_words(
            tokens
                .as_ref()
                .iter()
                .map(|&token| self.id_to_token_or_unk(token))
                .filter(|word| !self.is_special(word)),
        )
    }

    /// Decode a batch of token sequences into strings.
    pub fn decode_batch(
        &self,
        batch: &[Vec<T>],
    ) -> Vec<String> {
        batch.iter().map(|t| self.decode(t)).collect()
    }

    /// Return the id for a vocabulary word, if any.
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.vocab.lookup_token(token)
    }

    /// Return the vocabulary word for an id, if any.
    pub fn id_to_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.vocab.lookup_word(id)
    }

    fn id_to_token_or_unk(
        &self,
        id: T,
    ) -> &str {
        self.vocab
            .lookup_word(id)
            .unwrap_or_else(|| self.options.specials.unk_token())
    }

    /// Describe each id as a [`TokenInfo`].
    ///
    /// Unknown ids are reported as the unknown token.
    pub fn token_infos<S: AsRef<[T]>>(
        &self,
        tokens: S,
    ) -> Vec<TokenInfo<T>> {
        tokens
            .as_ref()
            .iter()
            .map(|&id| {
                let token = self.id_to_token_or_unk(id);
                TokenInfo::new(id, token, self.is_special(token))
            })
            .collect()
    }

    /// Vocabulary entries containing `fragment`, by ascending id.
    ///
    /// The fragment is lower-cased first, matching normalized words.
    pub fn search(
        &self,
        fragment: &str,
    ) -> Vec<TokenInfo<T>> {
        let fragment = fragment.to_lowercase();
        self.vocab
            .iter()
            .filter(|(token, _)| token.contains(fragment.as_str()))
            .map(|(token, id)| TokenInfo::new(id, token, self.is_special(token)))
            .collect()
    }

    /// Get the underlying vocabulary.
    pub fn word_vocab(&self) -> &WordVocab<T> {
        &self.vocab
    }

    /// Get the ``{ word -> id }`` map.
    pub fn vocab(&self) -> &WordToTokenMap<T> {
        self.vocab.word_map()
    }

    /// Get the ``id -> word`` table; `reverse_vocab()[id]` is the word for `id`.
    pub fn reverse_vocab(&self) -> &[CompactString] {
        self.vocab.id_words()
    }

    /// ``(word, id)`` pairs sorted by ascending id.
    pub fn vocab_entries(&self) -> Vec<(&str, T)> {
        self.vocab.iter().collect()
    }

    /// Word frequencies from the last training call, in first-seen order.
    pub fn token_counts(&self) -> impl Iterator<Item = (&str, u64)> {
        self.word_counts.iter()
    }

    /// The number of entries in the vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Vocabulary and last-training statistics.
    pub fn stats(&self) -> VocabStats {
        let vocab_size = self.vocab.len();
        let special_token_count = self.options.specials.len();
        VocabStats {
            vocab_size,
            special_token_count,
            regular_word_count: vocab_size - special_token_count,
            total_training_words: self.word_counts.total_count(),
            training_texts: self.word_counts.sample_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{check_is_send, check_is_sync};
    use crate::vocab::special_tokens::UNK;

    fn trained(
        max_vocab_size: usize,
        texts: &[&str],
    ) -> WordTokenizer<u32> {
        let mut tokenizer = WordTokenizer::with_max_vocab_size(max_vocab_size).unwrap();
        tokenizer.learn_vocab(texts);
        tokenizer
    }

    #[test]
    fn test_new() {
        let tokenizer = WordTokenizer::<u32>::with_max_vocab_size(10).unwrap();
        check_is_send(&tokenizer);
        check_is_sync(&tokenizer);

        assert_eq!(
            tokenizer.vocab_entries(),
            vec![("<unk>", 0), ("<pad>", 1), ("<start>", 2), ("<end>", 3)]
        );
        assert_eq!(tokenizer.unk_id(), 0);
        assert_eq!(tokenizer.pad_id(), 1);
        assert_eq!(tokenizer.start_id(), 2);
        assert_eq!(tokenizer.end_id(), 3);
        assert_eq!(tokenizer.stats(), VocabStats {
            vocab_size: 4,
            special_token_count: 4,
            regular_word_count: 0,
            total_training_words: 0,
            training_texts: 0,
        });
    }

    #[test]
    fn test_new_too_small() {
        assert_eq!(
            WordTokenizer::<u32>::with_max_vocab_size(2).unwrap_err(),
            VocabConfigError::VocabTooSmall {
                max_vocab_size: 2,
                special_count: 4,
            }
        );
    }

    #[test]
    fn test_untrained_encodes_unknown() {
        let tokenizer = WordTokenizer::<u32>::with_max_vocab_size(10).unwrap();
        assert_eq!(tokenizer.encode("hello world"), vec![2, 0, 0, 3]);
        assert_eq!(tokenizer.encode(""), vec![2, 3]);
        assert_eq!(tokenizer.decode([2, 0, 0, 3]), "");
    }

    #[test]
    fn test_learn_vocab() {
        let tokenizer = trained(10, &["the cat sat", "the dog sat down"]);

        assert_eq!(
            tokenizer.vocab_entries(),
            vec![
                ("<unk>", 0),
                ("<pad>", 1),
                ("<start>", 2),
                ("<end>", 3),
                ("the", 4),
                ("sat", 5),
                ("cat", 6),
                ("dog", 7),
                ("down", 8),
            ]
        );
        assert_eq!(
            tokenizer.token_counts().collect::<Vec<_>>(),
            vec![("the", 2), ("cat", 1), ("sat", 2), ("dog", 1), ("down", 1)]
        );
        assert_eq!(tokenizer.stats(), VocabStats {
            vocab_size: 9,
            special_token_count: 4,
            regular_word_count: 5,
            total_training_words: 7,
            training_texts: 2,
        });
    }

    #[test]
    fn test_learn_vocab_replaces() {
        let mut tokenizer = trained(10, &["apple apple banana"]);
        assert!(tokenizer.token_to_id("banana").is_some());

        tokenizer.learn_vocab(["cherry"]);
        assert_eq!(tokenizer.token_to_id("apple"), None);
        assert_eq!(tokenizer.token_to_id("banana"), None);
        assert_eq!(tokenizer.token_to_id("cherry"), Some(4));
        assert_eq!(tokenizer.stats().total_training_words, 1);
        assert_eq!(tokenizer.stats().training_texts, 1);
    }

    #[test]
    fn test_special_string_in_corpus() {
        let tokenizer = trained(6, &["<unk> <unk> x y z"]);
        assert_eq!(tokenizer.token_to_id("<unk>"), Some(0));
        assert_eq!(tokenizer.token_to_id("x"), Some(4));
        assert_eq!(tokenizer.token_to_id("y"), Some(5));
        assert_eq!(tokenizer.token_to_id("z"), None);
        assert_eq!(tokenizer.vocab_size(), 6);
    }

    #[test]
    fn test_encode_decode() {
        let tokenizer = trained(20, &["Hi, world!", "hello world."]);

        assert_eq!(
            tokenizer.tokenize("Hi, world!"),
            vec!["hi", ",", "world", "!"]
        );

        let ids = tokenizer.encode("Hi, world!");
        assert_eq!(ids.first(), Some(&tokenizer.start_id()));
        assert_eq!(ids.last(), Some(&tokenizer.end_id()));
        assert_eq!(ids.len(), 6);
        assert!(!ids.contains(&tokenizer.unk_id()));

        assert_eq!(tokenizer.decode(&ids), "hi, world!");
    }

    #[test]
    fn test_encode_unknown_word() {
        let tokenizer = trained(10, &["the cat sat"]);
        let ids = tokenizer.encode("the zzz_never_seen sat");
        assert_eq!(
            ids,
            vec![
                tokenizer.start_id(),
                tokenizer.token_to_id("the").unwrap(),
                tokenizer.unk_id(),
                tokenizer.token_to_id("sat").unwrap(),
                tokenizer.end_id(),
            ]
        );
        assert_eq!(tokenizer.decode(&ids), "the sat");
    }

    #[test]
    fn test_decode_unknown_ids() {
        let tokenizer = trained(10, &["the cat sat"]);
        let the = tokenizer.token_to_id("the").unwrap();
        assert_eq!(tokenizer.decode([the, 9999, u32::MAX]), "the");
        assert_eq!(tokenizer.decode(Vec::<u32>::new()), "");
        assert_eq!(tokenizer.decode([0, 1, 2, 3]), "");
    }

    #[test]
    fn test_batches() {
        let tokenizer = trained(10, &["the cat sat"]);
        let batch = ["the cat", "sat"];
        let ids = tokenizer.encode_batch(&batch);
        assert_eq!(ids.len(), 2);
        assert_eq!(tokenizer.decode_batch(&ids), vec!["the cat", "sat"]);
    }

    #[test]
    fn test_token_infos() {
        let tokenizer = trained(10, &["the cat sat"]);
        let the = tokenizer.token_to_id("the").unwrap();

        assert_eq!(
            tokenizer.token_infos([2, the, 42]),
            vec![
                TokenInfo::new(2, "<start>", true),
                TokenInfo::new(the, "the", false),
                TokenInfo::new(42, "<unk>", true),
            ]
        );
    }

    #[test]
    fn test_search() {
        let tokenizer = trained(20, &["cat catalog dog concat"]);

        let infos = tokenizer.search("CAT");
        let hits: Vec<&str> = infos.iter().map(|info| info.token.as_str()).collect();
        assert_eq!(hits, vec!["cat", "catalog", "concat"]);

        let specials = tokenizer.search("<");
        assert_eq!(specials.len(), 4);
        assert!(specials.iter().all(|info| info.is_special));
    }

    #[test]
    fn test_custom_specials() {
        let options = TokenizerOptions::new(10)
            .with_special_token(UNK, "[UNK]")
            .with_special_token("MASK", "[MASK]");
        let mut tokenizer = WordTokenizer::<u16>::new(options).unwrap();
        tokenizer.learn_vocab(["a b"]);

        assert_eq!(tokenizer.token_to_id("[UNK]"), Some(0));
        assert_eq!(tokenizer.token_to_id("[MASK]"), Some(4));
        assert_eq!(tokenizer.token_to_id("a"), Some(5));
        assert!(tokenizer.is_special_id(4));
        assert!(!tokenizer.is_special_id(5));

        assert_eq!(tokenizer.encode("a q"), vec![2, 5, 0, 3]);
        assert_eq!(tokenizer.decode([4, 5, 6]), "a b");
        assert_eq!(tokenizer.stats().special_token_count, 5);
        assert_eq!(tokenizer.stats().regular_word_count, 2);
    }
}
