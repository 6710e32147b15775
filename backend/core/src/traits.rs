use async_trait::async_trait;

use crate::error::InkwizError;
use crate::types::{VisionRequest, VisionResponse};

/// A remote multimodal text-generation backend.
///
/// One call per upload: no retries, no caching. Implementations return the
/// raw model text; decoding it is the caller's job.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Provider name (e.g., "gemini", "mock").
    fn name(&self) -> &str;

    /// Send the prompt and inline image, returning the model's text reply.
    async fn generate(&self, request: &VisionRequest) -> Result<VisionResponse, InkwizError>;
}
