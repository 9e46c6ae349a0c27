//! Summarizer Registry
//!
//! Builds one `LsaSummarizer` per language on first use and shares it across
//! requests. Loading a stemmer and a stop-word list is cheap but not free, so
//! the instances are cached rather than rebuilt on every call.

use super::lsa::LsaSummarizer;
use super::types::{Language, LsaConfig};

use dashmap::DashMap;
use std::sync::Arc;

pub struct SummarizerRegistry {
    summarizers: DashMap<Language, Arc<LsaSummarizer>>,
    default_language: Language,
    config: LsaConfig,
}

impl SummarizerRegistry {
    pub fn new(default_language: Language, config: LsaConfig) -> Arc<Self> {
        let registry = Arc::new(Self {
            summarizers: DashMap::new(),
            default_language,
            config,
        });
        // Warm the default so the first request does not pay for it.
        registry.get(default_language);
        registry
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Returns the cached summarizer for `language`, creating it if needed.
    pub fn get(&self, language: Language) -> Arc<LsaSummarizer> {
        self.summarizers
            .entry(language)
            .or_insert_with(|| {
                tracing::info!("Loaded LSA summarizer for {}", language);
                Arc::new(LsaSummarizer::with_config(language, self.config))
            })
            .clone()
    }

    pub fn loaded_languages(&self) -> Vec<Language> {
        self.summarizers.iter().map(|entry| *entry.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.summarizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summarizers.is_empty()
    }
}
