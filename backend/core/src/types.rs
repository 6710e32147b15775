use std::fmt;

use serde::{Deserialize, Serialize};

/// Hard ceiling for an uploaded request body (16 MiB).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Language the extracted text is expected to be in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Parse a form value. Absent, blank, or unknown tags resolve to English.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
            Some("hindi") => Self::Hindi,
            _ => Self::English,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uploaded image, alive only for the duration of one request.
#[derive(Clone)]
pub struct UploadRequest {
    pub filename: String,
    /// Content type declared by the client on the multipart part, if any.
    pub content_type: Option<String>,
    pub data: Vec<u8>,
    pub language: Language,
}

impl fmt::Debug for UploadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadRequest")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("size_bytes", &self.data.len())
            .field("language", &self.language)
            .finish()
    }
}

/// Sampling parameters sent with every generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            top_p: 1.0,
            top_k: 1,
            max_output_tokens: 4096,
            response_mime_type: "application/json".to_string(),
        }
    }
}

/// A single multimodal call: one prompt, one inline image.
#[derive(Clone)]
pub struct VisionRequest {
    pub prompt: &'static str,
    pub image: Vec<u8>,
    pub mime_type: String,
    pub generation: GenerationConfig,
}

impl fmt::Debug for VisionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisionRequest")
            .field("prompt_len", &self.prompt.len())
            .field("image_bytes", &self.image.len())
            .field("mime_type", &self.mime_type)
            .field("generation", &self.generation)
            .finish()
    }
}

/// Text recovered from a provider reply, before any JSON decoding.
#[derive(Debug, Clone)]
pub struct VisionResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    pub latency_ms: u64,
}

/// Successful result returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExtractionResult {
    pub extracted_text: String,
    pub corrected_text: String,
}

/// Error body returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
