//! LSA sentence ranking.
//!
//! Builds a stemmed term-sentence frequency matrix, decomposes it and scores
//! each sentence by the length of its vector in the reduced latent space.
//! When no dimension is dropped that length is the column norm itself, so the
//! decomposition is skipped.

use super::stopwords::StopwordFilter;
use super::svd;
use super::tokenizer::{Document, Sentence};
use super::types::{Language, LsaConfig, SummarizerError};
use rust_stemmers::Stemmer;
use rustc_hash::FxHashMap;

pub struct LsaSummarizer {
    language: Language,
    stemmer: Stemmer,
    stopwords: StopwordFilter,
    config: LsaConfig,
}

impl LsaSummarizer {
    pub fn new(language: Language) -> Self {
        Self::with_config(language, LsaConfig::default())
    }

    pub fn with_config(language: Language, config: LsaConfig) -> Self {
        Self {
            language,
            stemmer: Stemmer::create(language.stemmer_algorithm()),
            stopwords: StopwordFilter::new(language),
            config,
        }
    }

    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn config(&self) -> &LsaConfig {
        &self.config
    }

    /// Returns the `count` best sentences of `text`, in document order.
    pub fn summarize(&self, text: &str, count: usize) -> Result<Vec<String>, SummarizerError> {
        let document = Document::parse(text);
        let sentences: Vec<&Sentence> = document.sentences().collect();
        let ratings = self.rate_sentences(&document)?;

        if ratings.is_empty() {
            return Ok(Vec::new());
        }

        Ok(select_best(&ratings, count)
            .into_iter()
            .map(|idx| sentences[idx].text.clone())
            .collect())
    }

    /// One rating per body sentence, or an empty vector when no sentence
    /// contains a non-stop word.
    pub fn rate_sentences(&self, document: &Document) -> Result<Vec<f64>, SummarizerError> {
        let dictionary = self.build_dictionary(document);
        if dictionary.is_empty() {
            tracing::debug!("No content words in document, nothing to rank");
            return Ok(Vec::new());
        }

        let sentences: Vec<&Sentence> = document.sentences().collect();
        let mut matrix = self.build_matrix(&sentences, &dictionary);
        apply_term_frequency(&mut matrix, self.config.smoothing);

        let rank_bound = dictionary.len().min(sentences.len());
        if self.dimensions(rank_bound) >= rank_bound {
            // With every dimension kept, sum_k s_k^2 * V[j][k]^2 is exactly |A e_j|^2.
            return Ok(matrix.iter().map(|column| norm(column)).collect());
        }

        let decomposition = svd::decompose(&matrix)?;
        Ok(self.compute_ranks(&decomposition, sentences.len()))
    }

    /// Number of latent dimensions kept out of `rank_bound` singular values.
    fn dimensions(&self, rank_bound: usize) -> usize {
        let reduced = (rank_bound as f64 * self.config.reduction_ratio) as usize;
        self.config.min_dimensions.max(reduced)
    }

    fn stem(&self, word: &str) -> String {
        self.stemmer.stem(&word.to_lowercase()).into_owned()
    }

    /// Maps every stem of a non-stop word to its matrix row.
    pub(super) fn build_dictionary(&self, document: &Document) -> FxHashMap<String, usize> {
        let mut dictionary = FxHashMap::default();
        for word in document.words() {
            let normalized = word.to_lowercase();
            if self.stopwords.is_stopword(&normalized) {
                continue;
            }
            let next = dictionary.len();
            dictionary.entry(self.stem(&normalized)).or_insert(next);
        }
        dictionary
    }

    /// Column-major counts: `matrix[sentence][term]`.
    pub(super) fn build_matrix(
        &self,
        sentences: &[&Sentence],
        dictionary: &FxHashMap<String, usize>,
    ) -> Vec<Vec<f64>> {
        sentences
            .iter()
            .map(|sentence| {
                let mut column = vec![0.0; dictionary.len()];
                for word in &sentence.words {
                    if let Some(&row) = dictionary.get(&self.stem(word)) {
                        column[row] += 1.0;
                    }
                }
                column
            })
            .collect()
    }

    pub(super) fn compute_ranks(&self, decomposition: &svd::Svd, sentence_count: usize) -> Vec<f64> {
        let sigma = &decomposition.singular_values;
        let dimensions = self.dimensions(sigma.len());

        let powered: Vec<f64> = sigma
            .iter()
            .enumerate()
            .map(|(i, s)| if i < dimensions { s * s } else { 0.0 })
            .collect();

        (0..sentence_count)
            .map(|col| {
                powered
                    .iter()
                    .enumerate()
                    .map(|(k, p)| p * decomposition.v(col, k).powi(2))
                    .sum::<f64>()
                    .sqrt()
            })
            .collect()
    }
}

/// Scales each column by its maximum count and lifts it by `smoothing`.
/// Every cell of a non-zero column is rewritten, zeros included.
pub(super) fn apply_term_frequency(matrix: &mut [Vec<f64>], smoothing: f64) {
    for column in matrix.iter_mut() {
        let max = column.iter().copied().fold(0.0_f64, f64::max);
        if max == 0.0 {
            continue;
        }
        for cell in column.iter_mut() {
            *cell = smoothing + (1.0 - smoothing) * (*cell / max);
        }
    }
}

fn norm(column: &[f64]) -> f64 {
    column.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Indices of the `count` highest ratings, returned in ascending index order.
/// Equal ratings prefer the earlier sentence.
pub fn select_best(ratings: &[f64], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..ratings.len()).collect();
    order.sort_by(|&a, &b| ratings[b].total_cmp(&ratings[a]));
    order.truncate(count);
    order.sort_unstable();
    order
}
