pub mod error;
pub mod traits;
pub mod types;

pub use error::InkwizError;
pub use traits::VisionModel;
pub use types::{
    ErrorBody, ExtractionResult, GenerationConfig, Language, UploadRequest, VisionRequest,
    VisionResponse, MAX_UPLOAD_BYTES,
};
