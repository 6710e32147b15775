//! Gemini vision provider: one `generateContent` call per image.
//!
//! The API key travels in the `x-goog-api-key` header so it never appears in
//! a request URL (and therefore never in a transport error message).
use std::time::{Duration, Instant};

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use inkwiz_core::{GenerationConfig, InkwizError, VisionModel, VisionRequest, VisionResponse};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::response::extract_text;

const PROVIDER: &str = "gemini";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Longest slice of an upstream error body kept in the error message.
const MAX_ERROR_BODY: usize = 512;

/// Harm categories that get a blocking threshold when safety filters are on.
const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Per-category content-safety threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    pub category: &'static str,
    pub threshold: &'static str,
}

impl SafetySetting {
    /// Block medium-and-above severity in every supported category.
    pub fn block_medium_and_above() -> Vec<SafetySetting> {
        HARM_CATEGORIES
            .into_iter()
            .map(|category| SafetySetting {
                category,
                threshold: "BLOCK_MEDIUM_AND_ABOVE",
            })
            .collect()
    }
}

/// Google Gemini multimodal provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
    safety_settings: Vec<SafetySetting>,
}

impl GeminiProvider {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, InkwizError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| InkwizError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
            safety_settings: SafetySetting::block_medium_and_above(),
        })
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Enable or disable the per-category safety thresholds.
    pub fn with_safety_filters(mut self, enabled: bool) -> Self {
        self.safety_settings = if enabled {
            SafetySetting::block_medium_and_above()
        } else {
            Vec::new()
        };
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: &'a GenerationConfig,
    #[serde(skip_serializing_if = "<[SafetySetting]>::is_empty")]
    safety_settings: &'a [SafetySetting],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 2],
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData<'a>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[async_trait]
impl VisionModel for GeminiProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn generate(&self, request: &VisionRequest) -> Result<VisionResponse, InkwizError> {
        let start = Instant::now();

        let body = GenerateContentRequest {
            contents: [Content {
                parts: [
                    Part::Text {
                        text: request.prompt,
                    },
                    Part::Inline {
                        inline_data: InlineData {
                            mime_type: &request.mime_type,
                            data: STANDARD.encode(&request.image),
                        },
                    },
                ],
            }],
            generation_config: &request.generation,
            safety_settings: &self.safety_settings,
        };

        debug!(
            model = %self.model,
            mime_type = %request.mime_type,
            image_bytes = request.image.len(),
            "Sending request to Gemini"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(InkwizError::provider(
                PROVIDER,
                format!("HTTP {status}: {}", truncate(&error_body, MAX_ERROR_BODY)),
            ));
        }

        let reply: Value = response
            .json()
            .await
            .map_err(|e| InkwizError::MalformedResponse(format!("reply is not JSON: {e}")))?;

        let (shape, text) = extract_text(&reply)?;
        let latency_ms = start.elapsed().as_millis() as u64;
        debug!(?shape, latency_ms, chars = text.len(), "Gemini reply received");

        Ok(VisionResponse {
            text,
            provider: PROVIDER.to_string(),
            model: self.model.clone(),
            latency_ms,
        })
    }
}

impl GeminiProvider {
    fn transport_error(&self, err: reqwest::Error) -> InkwizError {
        if err.is_timeout() {
            InkwizError::Timeout(self.timeout)
        } else {
            InkwizError::provider(PROVIDER, format!("request failed: {err}"))
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
