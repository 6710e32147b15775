//! Turning model text into an [`ExtractionResult`].
//!
//! Models asked for JSON still sometimes wrap it in a markdown code fence or
//! add a sentence around it, so decoding is lenient about the envelope and
//! strict about the payload.

use inkwiz_core::{ExtractionResult, InkwizError};
use serde_json::{Map, Value};

/// Strip a surrounding markdown code fence (```` ```json ... ``` ````).
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        // Optional language tag, e.g. `json`.
        text = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Decode model text into the two result fields.
///
/// Missing or `null` fields become empty strings. Any other non-string value
/// is a malformed response.
pub fn decode_result(raw: &str) -> Result<ExtractionResult, InkwizError> {
    let cleaned = strip_code_fences(raw);
    let value = parse_lenient(cleaned)?;

    let object = match value {
        Value::Object(map) => map,
        // A one-element array holding the object is accepted as-is.
        Value::Array(items) if items.len() == 1 => match items.into_iter().next() {
            Some(Value::Object(map)) => map,
            other => return Err(not_an_object(other.as_ref().unwrap_or(&Value::Null))),
        },
        other => return Err(not_an_object(&other)),
    };

    Ok(ExtractionResult {
        extracted_text: string_field(&object, "extracted_text")?,
        corrected_text: string_field(&object, "corrected_text")?,
    })
}

fn parse_lenient(text: &str) -> Result<Value, InkwizError> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(err) => outermost_object(text)
            .and_then(|slice| serde_json::from_str(slice).ok())
            .ok_or_else(|| InkwizError::MalformedResponse(format!("invalid JSON: {err}"))),
    }
}

/// The span from the first `{` to the last `}`, if any.
fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn string_field(object: &Map<String, Value>, key: &str) -> Result<String, InkwizError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(InkwizError::MalformedResponse(format!(
            "field '{key}' is {}, expected a string",
            kind_of(other)
        ))),
    }
}

fn not_an_object(value: &Value) -> InkwizError {
    InkwizError::MalformedResponse(format!("expected a JSON object, got {}", kind_of(value)))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
