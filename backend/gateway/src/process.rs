//! `POST /process`: image in, extracted and corrected text out.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use inkwiz_core::{ExtractionResult, InkwizError};
use tracing::{debug, instrument};

use crate::admission::AdmissionPermit;
use crate::error::ApiError;
use crate::server::GatewayState;
use crate::upload::read_upload;

/// Handler for `POST /process`.
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn process_image(
    State(state): State<GatewayState>,
    _permit: AdmissionPermit,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ExtractionResult>, ApiError> {
    match run(&state, multipart).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            let err = ApiError(err);
            err.log();
            Err(err)
        }
    }
}

async fn run(
    state: &GatewayState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ExtractionResult, InkwizError> {
    let multipart = multipart.map_err(|e| InkwizError::MalformedUpload(e.body_text()))?;
    let upload = read_upload(multipart, state.upload_limit).await?;
    debug!(?upload, "Upload received");
    state.service.process(upload).await
}
