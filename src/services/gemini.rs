//! Client for the Google Generative Language REST API.
//!
//! Two call shapes are consumed: plain text generation (prompt in, text
//! out) and combined text+image generation, where the response carries a
//! list of content parts and each part is either text or inline
//! base64-encoded binary data.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for recipe text generation.
pub const TEXT_MODEL: &str = "gemini-1.5-flash";

/// First model tried for food image generation.
pub const PRIMARY_IMAGE_MODEL: &str = "gemini-2.0-flash-preview-image-generation";

/// Second model tried when the primary yields no image.
pub const SECONDARY_IMAGE_MODEL: &str = "gemini-2.0-flash";

const IMAGE_MODALITIES: &[&str] = &["TEXT", "IMAGE"];

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("no content in Gemini response")]
    NoContent,
}

/// One unit of a model response: text or inline binary data, never both.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
}

/// Inline binary payload of a content part.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload; the API may omit it.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Base64-encoded bytes.
    pub data: String,
}

/// Seam between the pipeline and the external generative service. The
/// production implementation is [`GeminiClient`]; tests substitute scripted
/// collaborators.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Prompt in, plain text out (first text part of the first candidate).
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GeminiError>;

    /// Prompt in, all content parts of the first candidate out, with
    /// text+image response modalities requested.
    async fn generate_parts(&self, model: &str, prompt: &str)
        -> Result<Vec<ContentPart>, GeminiError>;
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    response_modalities: &'static [&'static str],
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Error body returned by the API on non-2xx statuses.
#[derive(Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

#[derive(Deserialize)]
struct GeminiApiError {
    message: String,
}

/// Production client speaking to the Generative Language API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        modalities: Option<&'static [&'static str]>,
    ) -> Result<Vec<ContentPart>, GeminiError> {
        let url = format!("{GEMINI_BASE_URL}/models/{model}:generateContent");
        let body = GenerateContentRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: modalities.map(|response_modalities| GenerationConfig {
                response_modalities,
            }),
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            // The API wraps failures in {"error": {"message": ...}}; fall
            // back to the raw body when that shape is absent.
            let message = serde_json::from_str::<GeminiErrorResponse>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let decoded: GenerateContentResponse = response.json().await?;
        decoded
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .ok_or(GeminiError::NoContent)
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, GeminiError> {
        let parts = self.generate(model, prompt, None).await?;
        parts
            .into_iter()
            .find_map(|part| part.text)
            .ok_or(GeminiError::NoContent)
    }

    async fn generate_parts(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<Vec<ContentPart>, GeminiError> {
        self.generate(model, prompt, Some(IMAGE_MODALITIES)).await
    }
}
