//! MIME labelling for uploaded images.
//!
//! The model needs a `mimeType` for inline data. Uploads are labelled from
//! the filename extension, then from the part's declared content type, and
//! default to JPEG.

use std::path::Path;

const FALLBACK_IMAGE_MIME: &str = "image/jpeg";

/// Detect an image MIME type by file extension.
pub fn detect_image_mime(filename: &str) -> Option<&'static str> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mime = match ext.as_str() {
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "png"                   => "image/png",
        "gif"                   => "image/gif",
        "webp"                  => "image/webp",
        "heic"                  => "image/heic",
        "heif"                  => "image/heif",
        "avif"                  => "image/avif",
        "bmp"                   => "image/bmp",
        "tiff" | "tif"          => "image/tiff",
        _                       => return None,
    };
    Some(mime)
}

/// Whether a MIME type is for an image.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Choose the MIME type sent alongside the image bytes.
pub fn image_mime_type(filename: &str, declared: Option<&str>) -> String {
    if let Some(mime) = detect_image_mime(filename) {
        return mime.to_string();
    }
    declared
        .map(|d| d.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
        .filter(|d| is_image(d))
        .unwrap_or_else(|| FALLBACK_IMAGE_MIME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_png_by_extension() {
        assert_eq!(image_mime_type("scan.PNG", None), "image/png");
    }

    #[test]
    fn extension_wins_over_declared_type() {
        assert_eq!(image_mime_type("photo.webp", Some("image/png")), "image/webp");
    }

    #[test]
    fn falls_back_to_declared_image_type() {
        assert_eq!(image_mime_type("blob", Some("image/gif; foo=bar")), "image/gif");
    }

    #[test]
    fn non_image_declared_type_defaults_to_jpeg() {
        assert_eq!(
            image_mime_type("upload.bin", Some("application/octet-stream")),
            "image/jpeg"
        );
        assert_eq!(image_mime_type("noext", None), "image/jpeg");
    }
}
