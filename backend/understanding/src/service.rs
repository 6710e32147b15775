//! The image text service: one upload in, one model call, one result out.

use std::sync::Arc;

use inkwiz_core::{
    ExtractionResult, GenerationConfig, InkwizError, UploadRequest, VisionModel, VisionRequest,
};
use tracing::info;

use crate::decode::decode_result;
use crate::mime::image_mime_type;
use crate::prompts::prompt_for;

/// Extracts and corrects text from uploaded images.
///
/// Holds only read-only state, so one instance is shared by every request.
pub struct ImageTextService {
    model: Arc<dyn VisionModel>,
    generation: GenerationConfig,
    reject_empty_text: bool,
}

impl ImageTextService {
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self {
            model,
            generation: GenerationConfig::default(),
            reject_empty_text: false,
        }
    }

    /// When set, an empty `extracted_text` is reported as
    /// [`InkwizError::NoTextExtracted`] instead of an empty success.
    pub fn with_reject_empty_text(mut self, reject: bool) -> Self {
        self.reject_empty_text = reject;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.model.name()
    }

    /// Run one upload through the model.
    pub async fn process(&self, upload: UploadRequest) -> Result<ExtractionResult, InkwizError> {
        if upload.data.is_empty() {
            return Err(InkwizError::EmptyPayload);
        }

        let request = VisionRequest {
            prompt: prompt_for(upload.language),
            mime_type: image_mime_type(&upload.filename, upload.content_type.as_deref()),
            image: upload.data,
            generation: self.generation.clone(),
        };

        let reply = self.model.generate(&request).await?;
        let result = decode_result(&reply.text)?;

        if self.reject_empty_text && result.extracted_text.trim().is_empty() {
            return Err(InkwizError::NoTextExtracted);
        }

        info!(
            provider = %reply.provider,
            model = %reply.model,
            language = %upload.language,
            latency_ms = reply.latency_ms,
            extracted_chars = result.extracted_text.chars().count(),
            "Image processed"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockVisionModel;
    use inkwiz_core::Language;

    fn upload(language: Language) -> UploadRequest {
        UploadRequest {
            filename: "note.png".into(),
            content_type: Some("image/png".into()),
            data: vec![1, 2, 3, 4],
            language,
        }
    }

    #[tokio::test]
    async fn returns_decoded_fields() {
        let model = Arc::new(MockVisionModel::new("mock").with_response(
            "```json\n{\"extracted_text\":\"Hello\",\"corrected_text\":\"Hello.\"}\n```",
        ));
        let service = ImageTextService::new(model.clone());

        let result = service.process(upload(Language::English)).await.unwrap();
        assert_eq!(result.extracted_text, "Hello");
        assert_eq!(result.corrected_text, "Hello.");

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, prompt_for(Language::English));
        assert_eq!(calls[0].mime_type, "image/png");
        assert_eq!(calls[0].image_len, 4);
    }

    #[tokio::test]
    async fn selects_prompt_by_language() {
        let model = Arc::new(MockVisionModel::new("mock"));
        let service = ImageTextService::new(model.clone());

        service.process(upload(Language::Hindi)).await.unwrap();
        assert_eq!(model.calls()[0].prompt, prompt_for(Language::Hindi));
    }

    #[tokio::test]
    async fn empty_text_is_success_by_default() {
        let model = Arc::new(MockVisionModel::new("mock").with_response("{}"));
        let service = ImageTextService::new(model);

        let result = service.process(upload(Language::English)).await.unwrap();
        assert_eq!(result, ExtractionResult::default());
    }

    #[tokio::test]
    async fn empty_text_rejected_when_configured() {
        let model = Arc::new(
            MockVisionModel::new("mock").with_response(r#"{"extracted_text":"  "}"#),
        );
        let service = ImageTextService::new(model).with_reject_empty_text(true);

        let err = service.process(upload(Language::English)).await.unwrap_err();
        assert!(matches!(err, InkwizError::NoTextExtracted));
    }

    #[tokio::test]
    async fn malformed_reply_is_error() {
        let model = Arc::new(MockVisionModel::new("mock").with_response("not json"));
        let service = ImageTextService::new(model);

        let err = service.process(upload(Language::English)).await.unwrap_err();
        assert!(matches!(err, InkwizError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn empty_payload_never_reaches_model() {
        let model = Arc::new(MockVisionModel::new("mock"));
        let service = ImageTextService::new(model.clone());

        let mut empty = upload(Language::English);
        empty.data.clear();
        let err = service.process(empty).await.unwrap_err();
        assert!(matches!(err, InkwizError::EmptyPayload));
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn identical_uploads_make_independent_calls() {
        let model = Arc::new(MockVisionModel::new("mock"));
        let service = ImageTextService::new(model.clone());

        service.process(upload(Language::English)).await.unwrap();
        service.process(upload(Language::English)).await.unwrap();
        assert_eq!(model.call_count(), 2);
    }
}
