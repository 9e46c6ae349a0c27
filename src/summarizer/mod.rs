//! Summarizer Module
//!
//! Extractive summarization by Latent Semantic Analysis.
//!
//! ## Overview
//! Text is parsed into paragraphs and sentences, words are lower-cased and
//! stemmed, stop words are dropped, and the remaining stems form a
//! term-sentence matrix. Sentences are ranked by the magnitude of their
//! projection onto the matrix's leading singular vectors, and the best ones
//! are returned in their original order.
//!
//! ## Submodules
//! - **`tokenizer`**: Paragraph, heading, sentence and word splitting.
//! - **`stopwords`**: Per-language stop-word sets.
//! - **`svd`**: Thin singular value decomposition (nalgebra).
//! - **`lsa`**: Matrix construction, ranking and sentence selection.
//! - **`registry`**: Per-language cache of ready-to-use summarizers.
//! - **`types`**: Languages, tuning parameters and errors.

pub mod lsa;
pub mod registry;
pub mod stopwords;
pub mod svd;
pub mod tokenizer;
pub mod types;

pub use lsa::LsaSummarizer;
pub use registry::SummarizerRegistry;
pub use types::{Language, LsaConfig, SummarizerError};
