//! # Text Normalizer

use crate::normalization::PUNCTUATION;
use compact_str::CompactString;
use regex::Regex;

/// Build the word split pattern: a lone punctuation mark, or a run of
/// characters that are neither whitespace nor punctuation.
fn word_pattern() -> String {
    let marks: String = PUNCTUATION
        .iter()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    format!(r"[{marks}]|[^\s{marks}]+")
}

/// Returns true if the word is a single punctuation mark from [`PUNCTUATION`].
pub fn is_punctuation_word(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PUNCTUATION.contains(&c),
        _ => false,
    }
}

/// Join words with single spaces; punctuation attaches to the preceding word.
///
/// Empty words are skipped.
pub fn join_words<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for word in words {
        let word = word.as_ref();
        if word.is_empty() {
            continue;
        }
        if !text.is_empty() && !is_punctuation_word(word) {
            text.push(' ');
        }
        text.push_str(word);
    }
    text
}

/// Deterministic lower-case + punctuation-splitting word normalizer.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    word_re: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        let word_re = Regex::new(&word_pattern()).expect("punctuation word pattern is valid");
        Self { word_re }
    }

    /// The regex pattern used for word splitting.
    pub fn pattern(&self) -> &str {
        self.word_re.as_str()
    }

    /// Normalize text, appending each word to `words`.
    pub fn normalize_append(
        &self,
        text: &str,
        words: &mut Vec<CompactString>,
    ) {
        let lowered = text.to_lowercase();
        words.extend(
            self.word_re
                .find_iter(&lowered)
                .map(|m| CompactString::from(m.as_str())),
        );
    }

    /// Normalize text into its ordered word sequence.
    ///
    /// Empty or all-whitespace text yields no words.
    pub fn normalize<S: AsRef<str>>(
        &self,
        text: S,
    ) -> Vec<CompactString> {
        let mut words = Vec::new();
        self.normalize_append(text.as_ref(), &mut words);
        words
    }

    /// Rewrite text by normalizing and re-joining it.
    pub fn rewrite<S: AsRef<str>>(
        &self,
        text: S,
    ) -> String {
        join_words(self.normalize(text))
    }
}
