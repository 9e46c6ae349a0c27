//! API Module Tests
//!
//! Drives the router in-process and checks status codes and JSON bodies.
//!
//! ## Test Scopes
//! - **Health**: Liveness endpoint.
//! - **Summarize**: Happy path, defaults and sentence limits.
//! - **Validation**: Empty, short and zero/negative count inputs.
//! - **Rejections**: Malformed bodies, size limit, unknown language.
//! - **CORS**: Preflight handling and origin validation.

#[cfg(test)]
mod tests {
    use crate::api::error::ApiError;
    use crate::api::handlers::validate_input;
    use crate::api::types::{ApiSettings, TextInput};
    use crate::api::{app, cors_layer, routes};
    use crate::config::Config;
    use crate::summarizer::tokenizer::split_sentences;
    use crate::summarizer::{Language, LsaConfig, SummarizerError, SummarizerRegistry};
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::IntoResponse;
    use clap::Parser;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const TEST_TEXT: &str = "This is a test text. It contains multiple sentences. \
        We want to test if the summarization works correctly. \
        The summary should be shorter than the original text.";

    fn test_router() -> Router {
        let registry = SummarizerRegistry::new(Language::English, LsaConfig::default());
        routes(registry, ApiSettings::default())
    }

    async fn post_json(router: Router, body: Value) -> (StatusCode, Value) {
        post_raw(router, body.to_string()).await
    }

    async fn post_raw(router: Router, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/summarize")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn detail(body: &Value) -> &str {
        body["detail"].as_str().unwrap_or_default()
    }

    // ============================================================
    // HEALTH
    // ============================================================

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({"status": "healthy"}));
    }

    // ============================================================
    // SUMMARIZE - happy path
    // ============================================================

    #[tokio::test]
    async fn test_summarize_text() {
        let (status, body) =
            post_json(test_router(), json!({"text": TEST_TEXT, "num_sentences": 2})).await;

        assert_eq!(status, StatusCode::OK);
        let summary = body["summary"].as_str().unwrap();
        assert!(!summary.is_empty());
        assert!(summary.split(". ").count() <= 2);
        assert_eq!(split_sentences(summary).len(), 2);
    }

    #[tokio::test]
    async fn test_summarize_sentences_come_from_input() {
        let (status, body) =
            post_json(test_router(), json!({"text": TEST_TEXT, "num_sentences": 3})).await;

        assert_eq!(status, StatusCode::OK);
        for sentence in split_sentences(body["summary"].as_str().unwrap()) {
            assert!(TEST_TEXT.contains(sentence), "unexpected sentence: {}", sentence);
        }
    }

    #[tokio::test]
    async fn test_summarize_defaults_to_three_sentences() {
        let text = format!("{} Cargo builds the project. Clippy lints the code.", TEST_TEXT);
        let (status, body) = post_json(test_router(), json!({"text": text})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(split_sentences(body["summary"].as_str().unwrap()).len(), 3);
    }

    #[tokio::test]
    async fn test_summarize_more_sentences_than_available() {
        let (status, body) =
            post_json(test_router(), json!({"text": TEST_TEXT, "num_sentences": 50})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(split_sentences(body["summary"].as_str().unwrap()).len(), 4);
    }

    #[tokio::test]
    async fn test_summarize_with_explicit_language() {
        let text = "Der Hund läuft schnell durch den Park. Die Katze schläft auf dem Sofa. \
            Am Abend regnet es in der ganzen Stadt.";
        let (status, body) = post_json(
            test_router(),
            json!({"text": text, "num_sentences": 1, "language": "de"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(split_sentences(body["summary"].as_str().unwrap()).len(), 1);
    }

    #[tokio::test]
    async fn test_summarize_repeated_sentences() {
        let repeated = "Rust is a systems programming language focused on safety.";
        let text = format!(
            "{repeated} Cargo builds crates quickly. {repeated} \
             Memory bugs cause vulnerabilities. {repeated}"
        );

        let (status, body) =
            post_json(test_router(), json!({"text": text, "num_sentences": 2})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(split_sentences(body["summary"].as_str().unwrap()).len(), 2);
    }

    #[tokio::test]
    async fn test_summarize_repeated_sentences_with_reduced_dimensions() {
        let registry = SummarizerRegistry::new(
            Language::English,
            LsaConfig {
                reduction_ratio: 0.5,
                ..LsaConfig::default()
            },
        );
        let text = format!(
            "{}{}",
            "Cats chase mice in old barns. ".repeat(60),
            "Dogs guard sheep on green farms. ".repeat(60)
        );

        let (status, body) = post_json(
            routes(registry, ApiSettings::default()),
            json!({"text": text, "num_sentences": 3}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(split_sentences(body["summary"].as_str().unwrap()).len(), 3);
    }

    // ============================================================
    // SUMMARIZE - validation
    // ============================================================

    #[tokio::test]
    async fn test_summarize_empty_text() {
        let (status, body) =
            post_json(test_router(), json!({"text": "", "num_sentences": 2})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(detail(&body).contains("Text cannot be empty"));
    }

    #[tokio::test]
    async fn test_summarize_whitespace_text() {
        let (status, body) =
            post_json(test_router(), json!({"text": "  \n\t ", "num_sentences": 2})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(detail(&body).contains("Text cannot be empty"));
    }

    #[tokio::test]
    async fn test_summarize_short_text() {
        let (status, body) =
            post_json(test_router(), json!({"text": "Too short", "num_sentences": 2})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(detail(&body).contains("Text must contain at least 10 words"));
    }

    #[tokio::test]
    async fn test_summarize_invalid_sentences() {
        let text = "This is a test text with more than ten words to test the validation \
            of the number of sentences parameter.";

        for count in [0, -1, -100] {
            let (status, body) =
                post_json(test_router(), json!({"text": text, "num_sentences": count})).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(detail(&body).contains("Number of sentences must be at least 1"));
        }
    }

    #[tokio::test]
    async fn test_summarize_unknown_language() {
        let (status, body) = post_json(
            test_router(),
            json!({"text": TEST_TEXT, "num_sentences": 2, "language": "klingon"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(detail(&body), "Unsupported language: klingon");
    }

    #[test]
    fn test_validate_input_order() {
        let settings = ApiSettings::default();
        let input = |text: &str, num_sentences: i64| TextInput {
            text: text.to_string(),
            num_sentences,
            language: None,
        };

        assert!(matches!(
            validate_input(&input("", 0), &settings),
            Err(ApiError::EmptyText)
        ));
        assert!(matches!(
            validate_input(&input("one two", 0), &settings),
            Err(ApiError::TextTooShort { min_words: 10 })
        ));
        assert!(matches!(
            validate_input(&input(TEST_TEXT, 0), &settings),
            Err(ApiError::InvalidSentenceCount)
        ));
        assert_eq!(validate_input(&input(TEST_TEXT, 4), &settings).unwrap(), 4);
    }

    #[test]
    fn test_validate_input_respects_min_words() {
        let settings = ApiSettings { min_words: 2 };
        let input = TextInput {
            text: "Two words".to_string(),
            num_sentences: 1,
            language: None,
        };
        assert_eq!(validate_input(&input, &settings).unwrap(), 1);
    }

    // ============================================================
    // SUMMARIZE - body rejections
    // ============================================================

    #[tokio::test]
    async fn test_summarize_wrong_field_type() {
        let (status, body) = post_json(
            test_router(),
            json!({"text": TEST_TEXT, "num_sentences": "two"}),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!detail(&body).is_empty());
    }

    #[tokio::test]
    async fn test_summarize_missing_text() {
        let (status, _) = post_json(test_router(), json!({"num_sentences": 2})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_summarize_invalid_json() {
        let (status, body) = post_raw(test_router(), "{not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!detail(&body).is_empty());
    }

    #[tokio::test]
    async fn test_summarize_body_limit() {
        let config =
            Config::try_parse_from(["text-summarizer", "--max-body-bytes", "64"]).unwrap();
        let router = app(&config).unwrap();

        let (status, _) =
            post_json(router, json!({"text": TEST_TEXT, "num_sentences": 2})).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    // ============================================================
    // ERROR MAPPING
    // ============================================================

    #[tokio::test]
    async fn test_summarizer_error_maps_to_500() {
        let error = ApiError::from(SummarizerError::SvdDidNotConverge);
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            detail(&body),
            "singular value decomposition did not converge"
        );
    }

    // ============================================================
    // CORS
    // ============================================================

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri("/summarize")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let config = Config::try_parse_from(["text-summarizer"]).unwrap();
        let router = app(&config).unwrap();

        let response = router
            .oneshot(preflight("http://localhost:3000"))
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[test]
    fn test_cors_rejects_wildcard_origin() {
        assert!(cors_layer(&["*".to_string()]).is_err());
        assert!(cors_layer(&[" * ".to_string()]).is_err());
        assert!(cors_layer(&["http://localhost:3000".to_string()]).is_ok());

        let config =
            Config::try_parse_from(["text-summarizer", "--cors-origin", "*"]).unwrap();
        assert!(app(&config).is_err());
    }

    #[tokio::test]
    async fn test_cors_ignores_other_origins() {
        let config = Config::try_parse_from(["text-summarizer"]).unwrap();
        let router = app(&config).unwrap();

        let response = router
            .oneshot(preflight("http://evil.example"))
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }
}
