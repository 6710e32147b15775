use std::time::Duration;

use thiserror::Error;

/// Top-level error type for the Inkwiz service.
#[derive(Debug, Error)]
pub enum InkwizError {
    #[error("No file uploaded.")]
    MissingFile,

    #[error("Empty file name.")]
    EmptyFilename,

    #[error("Uploaded file is empty.")]
    EmptyPayload,

    #[error("No text could be extracted from the image.")]
    NoTextExtracted,

    #[error("Malformed upload: {0}")]
    MalformedUpload(String),

    #[error("Upload exceeds the {limit} byte limit.")]
    PayloadTooLarge { limit: usize },

    #[error("server is at its concurrent request limit")]
    Overloaded,

    #[error("vision provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    #[error("vision provider timed out after {0:?}")]
    Timeout(Duration),

    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkwizError {
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Whether the caller caused this error. Client errors carry a message
    /// that is safe to echo back; everything else is reported generically.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFile
                | Self::EmptyFilename
                | Self::EmptyPayload
                | Self::NoTextExtracted
                | Self::MalformedUpload(_)
                | Self::PayloadTooLarge { .. }
        )
    }
}
