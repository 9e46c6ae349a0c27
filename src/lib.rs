//! Text Summarizer Service Library
//!
//! This library crate defines the modules behind the summarization service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`summarizer`**: Extractive summarization by Latent Semantic Analysis.
//!   Parses text into sentences, builds a stemmed term-sentence matrix and
//!   ranks sentences through a singular value decomposition.
//! - **`api`**: The HTTP surface. Request validation, error-to-status mapping
//!   and the Axum router with its CORS and tracing layers.
//! - **`config`**: Command-line/environment configuration and logger set-up.

pub mod api;
pub mod config;
pub mod summarizer;
