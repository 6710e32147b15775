//! Reading the `/process` multipart form into an [`UploadRequest`].

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use inkwiz_core::{InkwizError, Language, UploadRequest};

pub const FILE_FIELD: &str = "file";
pub const LANGUAGE_FIELD: &str = "language";

/// Consume the form. Fields other than `file` and `language` are ignored;
/// only the first `file` part is kept.
pub async fn read_upload(
    mut multipart: Multipart,
    limit: usize,
) -> Result<UploadRequest, InkwizError> {
    let mut file = None;
    let mut language = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) if file.is_none() => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
                file = Some((filename, content_type, data));
            }
            Some(LANGUAGE_FIELD) => {
                language = Some(field.text().await.map_err(|e| multipart_error(e, limit))?);
            }
            _ => {}
        }
    }

    let (filename, content_type, data) = file.ok_or(InkwizError::MissingFile)?;
    if filename.trim().is_empty() {
        return Err(InkwizError::EmptyFilename);
    }
    if data.is_empty() {
        return Err(InkwizError::EmptyPayload);
    }

    Ok(UploadRequest {
        filename,
        content_type,
        data: data.to_vec(),
        language: Language::from_tag(language.as_deref()),
    })
}

fn multipart_error(err: MultipartError, limit: usize) -> InkwizError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        InkwizError::PayloadTooLarge { limit }
    } else {
        InkwizError::MalformedUpload(err.body_text())
    }
}
