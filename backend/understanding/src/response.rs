//! Pulling the model's text out of a `generateContent` reply.
//!
//! The reply schema is not stable across API versions and proxies, so the
//! text is looked up through a fixed list of known shapes. The first shape
//! that yields non-blank text wins.

use inkwiz_core::InkwizError;
use serde_json::Value;

/// A known location of the reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `candidates[0].content.parts[0].text`
    FirstCandidatePart,
    /// Every text part of `candidates[0]`, concatenated in order.
    CandidateParts,
    /// A flat top-level `text` field.
    FlatText,
}

impl ResponseShape {
    /// Lookup order.
    pub const PRIORITY: [ResponseShape; 3] = [
        ResponseShape::FirstCandidatePart,
        ResponseShape::CandidateParts,
        ResponseShape::FlatText,
    ];

    /// Try this shape against a reply body.
    pub fn extract(self, body: &Value) -> Option<String> {
        let text = match self {
            Self::FirstCandidatePart => body
                .pointer("/candidates/0/content/parts/0/text")
                .and_then(Value::as_str)
                .map(str::to_string),
            Self::CandidateParts => {
                let parts = body.pointer("/candidates/0/content/parts")?.as_array()?;
                let joined: String = parts
                    .iter()
                    .filter(|p| !p.get("thought").and_then(Value::as_bool).unwrap_or(false))
                    .filter_map(|p| p.get("text").and_then(Value::as_str))
                    .collect();
                Some(joined)
            }
            Self::FlatText => body.get("text").and_then(Value::as_str).map(str::to_string),
        };
        text.filter(|t| !t.trim().is_empty())
    }
}

/// Extract the reply text, trying every [`ResponseShape`] in priority order.
pub fn extract_text(body: &Value) -> Result<(ResponseShape, String), InkwizError> {
    for shape in ResponseShape::PRIORITY {
        if let Some(text) = shape.extract(body) {
            return Ok((shape, text));
        }
    }
    Err(InkwizError::MalformedResponse(format!(
        "no text in model reply{}",
        describe_empty_reply(body)
    )))
}

/// Explain why a reply carried no text, when the service says so.
fn describe_empty_reply(body: &Value) -> String {
    if let Some(reason) = body
        .pointer("/promptFeedback/blockReason")
        .and_then(Value::as_str)
    {
        return format!(" (prompt blocked: {reason})");
    }
    if let Some(reason) = body
        .pointer("/candidates/0/finishReason")
        .and_then(Value::as_str)
    {
        return format!(" (finish reason: {reason})");
    }
    match body.get("candidates").and_then(Value::as_array) {
        Some(c) if c.is_empty() => " (no candidates)".to_string(),
        None => " (no candidates)".to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_first_candidate_part() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"a\":1}" }] } }]
        });
        let (shape, text) = extract_text(&body).unwrap();
        assert_eq!(shape, ResponseShape::FirstCandidatePart);
        assert_eq!(text, "{\"a\":1}");
    }

    #[test]
    fn joins_parts_when_first_part_has_no_text() {
        let body = json!({
            "candidates": [{ "content": { "parts": [
                { "thoughtSignature": "abc" },
                { "text": "{\"extracted_text\":" },
                { "thought": true, "text": "ignored" },
                { "text": "\"x\"}" }
            ] } }]
        });
        let (shape, text) = extract_text(&body).unwrap();
        assert_eq!(shape, ResponseShape::CandidateParts);
        assert_eq!(text, "{\"extracted_text\":\"x\"}");
    }

    #[test]
    fn falls_back_to_flat_text() {
        let body = json!({ "text": "{}" });
        let (shape, text) = extract_text(&body).unwrap();
        assert_eq!(shape, ResponseShape::FlatText);
        assert_eq!(text, "{}");
    }

    #[test]
    fn blocked_prompt_is_malformed_response() {
        let body = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = extract_text(&body).unwrap_err();
        assert!(matches!(err, InkwizError::MalformedResponse(_)));
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn blank_text_everywhere_is_error() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  " }] },
                "finishReason": "MAX_TOKENS"
            }]
        });
        let err = extract_text(&body).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }
}
