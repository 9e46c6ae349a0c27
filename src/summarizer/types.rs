//! Summarizer Types
//!
//! Language selection, tuning knobs and the error type shared by the
//! summarization pipeline.

use rust_stemmers::Algorithm;
use std::fmt;
use std::str::FromStr;
use stop_words::LANGUAGE;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("term-sentence matrix contains non-finite values")]
    NonFiniteMatrix,

    #[error("singular value decomposition did not converge")]
    SvdDidNotConverge,
}

/// Languages with both a Snowball stemmer and a stop-word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    Swedish,
    Norwegian,
    Danish,
    Hungarian,
    Turkish,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::German => "german",
            Language::French => "french",
            Language::Spanish => "spanish",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::Dutch => "dutch",
            Language::Russian => "russian",
            Language::Swedish => "swedish",
            Language::Norwegian => "norwegian",
            Language::Danish => "danish",
            Language::Hungarian => "hungarian",
            Language::Turkish => "turkish",
        }
    }

    pub(crate) fn stemmer_algorithm(&self) -> Algorithm {
        match self {
            Language::English => Algorithm::English,
            Language::German => Algorithm::German,
            Language::French => Algorithm::French,
            Language::Spanish => Algorithm::Spanish,
            Language::Italian => Algorithm::Italian,
            Language::Portuguese => Algorithm::Portuguese,
            Language::Dutch => Algorithm::Dutch,
            Language::Russian => Algorithm::Russian,
            Language::Swedish => Algorithm::Swedish,
            Language::Norwegian => Algorithm::Norwegian,
            Language::Danish => Algorithm::Danish,
            Language::Hungarian => Algorithm::Hungarian,
            Language::Turkish => Algorithm::Turkish,
        }
    }

    pub(crate) fn stopword_list(&self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::German => LANGUAGE::German,
            Language::French => LANGUAGE::French,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
            Language::Russian => LANGUAGE::Russian,
            Language::Swedish => LANGUAGE::Swedish,
            Language::Norwegian => LANGUAGE::Norwegian,
            Language::Danish => LANGUAGE::Danish,
            Language::Hungarian => LANGUAGE::Hungarian,
            Language::Turkish => LANGUAGE::Turkish,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = SummarizerError;

    /// Accepts the full English name or the ISO 639-1 code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = match s.trim().to_lowercase().as_str() {
            "en" | "english" => Language::English,
            "de" | "german" => Language::German,
            "fr" | "french" => Language::French,
            "es" | "spanish" => Language::Spanish,
            "it" | "italian" => Language::Italian,
            "pt" | "portuguese" => Language::Portuguese,
            "nl" | "dutch" => Language::Dutch,
            "ru" | "russian" => Language::Russian,
            "sv" | "swedish" => Language::Swedish,
            "no" | "norwegian" => Language::Norwegian,
            "da" | "danish" => Language::Danish,
            "hu" | "hungarian" => Language::Hungarian,
            "tr" | "turkish" => Language::Turkish,
            _ => return Err(SummarizerError::UnsupportedLanguage(s.to_string())),
        };
        Ok(language)
    }
}

/// Tuning parameters of the LSA ranking step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LsaConfig {
    /// Lower bound on the number of latent dimensions kept.
    pub min_dimensions: usize,
    /// Fraction of singular values kept (1.0 keeps all of them).
    pub reduction_ratio: f64,
    /// Term-frequency smoothing factor, in `[0, 1)`.
    pub smoothing: f64,
}

impl Default for LsaConfig {
    fn default() -> Self {
        Self {
            min_dimensions: 3,
            reduction_ratio: 1.0,
            smoothing: 0.4,
        }
    }
}
