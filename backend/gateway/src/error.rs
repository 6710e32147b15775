//! Mapping service errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use inkwiz_core::{ErrorBody, InkwizError};
use inkwiz_logging::redact_sensitive_data;
use tracing::{error, warn};

/// Message returned for every server-side failure. The real cause is logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Please try again later.";

pub const BUSY_MESSAGE: &str = "Server is busy. Please try again shortly.";

/// An [`InkwizError`] on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub InkwizError);

impl From<InkwizError> for ApiError {
    fn from(err: InkwizError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            InkwizError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            InkwizError::Overloaded => StatusCode::SERVICE_UNAVAILABLE,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body text safe to show the caller.
    pub fn public_message(&self) -> String {
        match &self.0 {
            InkwizError::Overloaded => BUSY_MESSAGE.to_string(),
            e if e.is_client_error() => e.to_string(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// Write the one log line for this failure. Server-side causes are
    /// redacted before logging.
    pub fn log(&self) {
        let status = self.status();
        if status.is_server_error() {
            error!(
                status = status.as_u16(),
                error = %redact_sensitive_data(&self.0.to_string()),
                "Request failed"
            );
        } else {
            warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.public_message()))).into_response()
    }
}
