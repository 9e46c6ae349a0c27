use super::error::ApiError;
use super::types::{ApiSettings, HealthResponse, SummaryOutput, TextInput};
use crate::summarizer::{Language, SummarizerRegistry};
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use std::sync::Arc;

#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn handle_summarize(
    Extension(registry): Extension<Arc<SummarizerRegistry>>,
    Extension(settings): Extension<ApiSettings>,
    payload: Result<Json<TextInput>, JsonRejection>,
) -> Result<Json<SummaryOutput>, ApiError> {
    let Json(input) = payload?;
    let count = validate_input(&input, &settings)?;

    let language = match input.language.as_deref() {
        Some(name) => name
            .parse::<Language>()
            .map_err(|_| ApiError::UnsupportedLanguage(name.to_string()))?,
        None => registry.default_language(),
    };

    tracing::debug!(
        "Summarizing {} bytes into at most {} sentences ({})",
        input.text.len(),
        count,
        language
    );

    let summarizer = registry.get(language);
    let text = input.text;
    let sentences =
        tokio::task::spawn_blocking(move || summarizer.summarize(&text, count)).await??;

    tracing::info!("Produced summary of {} sentences", sentences.len());

    Ok(Json(SummaryOutput {
        summary: sentences.join(" "),
    }))
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Checks the request in order: empty text, word count, sentence count.
/// Returns the requested sentence count on success.
pub fn validate_input(input: &TextInput, settings: &ApiSettings) -> Result<usize, ApiError> {
    if input.text.trim().is_empty() {
        return Err(ApiError::EmptyText);
    }

    if input.text.split_whitespace().count() < settings.min_words {
        return Err(ApiError::TextTooShort {
            min_words: settings.min_words,
        });
    }

    if input.num_sentences < 1 {
        return Err(ApiError::InvalidSentenceCount);
    }

    Ok(usize::try_from(input.num_sentences).unwrap_or(usize::MAX))
}
