//! Image understanding: turn an uploaded image into extracted and corrected
//! text by way of a remote multimodal model.

pub mod decode;
pub mod gemini;
pub mod mime;
pub mod mock;
pub mod prompts;
pub mod response;
pub mod service;

pub use decode::{decode_result, strip_code_fences};
pub use gemini::{GeminiProvider, SafetySetting};
pub use mime::image_mime_type;
pub use mock::MockVisionModel;
pub use prompts::prompt_for;
pub use response::{extract_text, ResponseShape};
pub use service::ImageTextService;
