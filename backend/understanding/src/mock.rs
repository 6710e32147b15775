use std::sync::Mutex;

use async_trait::async_trait;
use inkwiz_core::{InkwizError, VisionModel, VisionRequest, VisionResponse};

/// A mock vision model that returns a canned reply and records every call.
pub struct MockVisionModel {
    name: String,
    reply: Result<String, String>,
    seen: Mutex<Vec<RecordedCall>>,
}

/// What the mock was asked for on one call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: &'static str,
    pub mime_type: String,
    pub image_len: usize,
}

impl MockVisionModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reply: Ok("{\"extracted_text\":\"\",\"corrected_text\":\"\"}".to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, text: impl Into<String>) -> Self {
        self.reply = Ok(text.into());
        self
    }

    /// Every call fails with a provider error carrying `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.reply = Err(message.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl VisionModel for MockVisionModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, request: &VisionRequest) -> Result<VisionResponse, InkwizError> {
        self.seen
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                prompt: request.prompt,
                mime_type: request.mime_type.clone(),
                image_len: request.image.len(),
            });

        match &self.reply {
            Ok(text) => Ok(VisionResponse {
                text: text.clone(),
                provider: self.name.clone(),
                model: "mock".to_string(),
                latency_ms: 0,
            }),
            Err(message) => Err(InkwizError::provider(&self.name, message.clone())),
        }
    }
}
