use serde::{Deserialize, Serialize};

fn default_num_sentences() -> i64 {
    3
}

/// Body of `POST /summarize`.
///
/// `num_sentences` is signed so that zero and negative counts reach
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextInput {
    pub text: String,
    #[serde(default = "default_num_sentences")]
    pub num_sentences: i64,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Request limits shared by the handlers.
#[derive(Debug, Clone, Copy)]
pub struct ApiSettings {
    pub min_words: usize,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self { min_words: 10 }
    }
}
