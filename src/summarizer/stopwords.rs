//! Stop-word filtering backed by the `stop-words` crate.

use super::types::Language;
use rustc_hash::FxHashSet;

/// Case-insensitive set of words excluded from the term dictionary.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    pub fn new(language: Language) -> Self {
        let stopwords = stop_words::get(language.stopword_list())
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        Self { stopwords }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
