//! Service Configuration
//!
//! Command-line flags with environment-variable fallbacks, plus the logger
//! set-up that depends on them.

use crate::summarizer::{Language, LsaConfig};
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "text-summarizer")]
#[command(about = "HTTP service producing extractive LSA summaries of plain text")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "SUMMARIZER_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Origins allowed to call the API from a browser (comma-separated)
    #[arg(
        long = "cors-origin",
        env = "SUMMARIZER_CORS_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub cors_origins: Vec<String>,

    /// Language used when a request does not name one
    #[arg(long, env = "SUMMARIZER_LANGUAGE", default_value = "english")]
    pub language: Language,

    /// Minimum number of whitespace-separated words a text must contain
    #[arg(long, env = "SUMMARIZER_MIN_WORDS", default_value_t = 10)]
    pub min_words: usize,

    /// Maximum accepted request body size in bytes
    #[arg(long, env = "SUMMARIZER_MAX_BODY_BYTES", default_value_t = 1024 * 1024)]
    pub max_body_bytes: usize,

    /// Fraction of latent dimensions kept when ranking sentences
    #[arg(long, env = "SUMMARIZER_REDUCTION_RATIO", default_value_t = 1.0)]
    pub reduction_ratio: f64,

    /// Log output format
    #[arg(long, env = "SUMMARIZER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.reduction_ratio) {
            anyhow::bail!(
                "reduction ratio must be between 0 and 1, got {}",
                self.reduction_ratio
            );
        }
        if self.cors_origins.iter().any(|origin| origin.trim() == "*") {
            anyhow::bail!("wildcard CORS origin is not allowed, list origins explicitly");
        }
        if self.max_body_bytes == 0 {
            anyhow::bail!("max body size must be positive");
        }
        Ok(())
    }

    pub fn lsa_config(&self) -> LsaConfig {
        LsaConfig {
            reduction_ratio: self.reduction_ratio,
            ..LsaConfig::default()
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("text_summarizer=info,tower_http=info"));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(false).compact())
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init(),
    }
}
