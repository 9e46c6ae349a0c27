//! HTTP API Module
//!
//! Exposes the summarizer over HTTP.
//!
//! ## Endpoints
//! - `POST /summarize`: `{text, num_sentences = 3, language?}` -> `{summary}`.
//! - `GET /health`: `{status: "healthy"}`.
//!
//! Input problems answer 400, malformed bodies 422 and summarizer failures
//! 500; every error body has the shape `{"detail": "..."}`.
//!
//! ## Submodules
//! - **`handlers`**: Axum request handlers and input validation.
//! - **`error`**: `ApiError` and its mapping onto status codes.
//! - **`types`**: Request/response DTOs and handler settings.

pub mod error;
pub mod handlers;
pub mod types;

use crate::config::Config;
use crate::summarizer::SummarizerRegistry;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::{
    Extension, Router,
    routing::{get, post},
};
use handlers::{handle_health, handle_summarize};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use types::ApiSettings;

/// Routes with their shared state, without transport layers.
pub fn routes(registry: Arc<SummarizerRegistry>, settings: ApiSettings) -> Router {
    Router::new()
        .route("/summarize", post(handle_summarize))
        .route("/health", get(handle_health))
        .layer(Extension(registry))
        .layer(Extension(settings))
}

/// Builds the full application from configuration: routes, CORS, body limit
/// and request tracing.
pub fn app(config: &Config) -> anyhow::Result<Router> {
    let registry = SummarizerRegistry::new(config.language, config.lsa_config());
    let settings = ApiSettings {
        min_words: config.min_words,
    };

    Ok(routes(registry, settings)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors_layer(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http()))
}

/// Allows the given origins with credentials; methods and headers are
/// mirrored from the preflight request. A wildcard origin cannot be combined
/// with credentials and is rejected.
pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            let origin = origin.trim();
            if origin == "*" {
                anyhow::bail!("wildcard CORS origin is not allowed, list origins explicitly");
            }
            Ok(HeaderValue::from_str(origin)?)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

#[cfg(test)]
mod tests;
