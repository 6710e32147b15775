//! Config redaction: produce safe-to-share config snapshots by masking secrets.

use serde_json::Value;

/// Field names whose values are secrets.
static SECRET_KEYS: &[&str] = &[
    "apiKey",
    "api_key",
    "gemini_api_key",
    "token",
    "secret",
    "password",
];

/// Mask a secret, keeping the first 4 chars as a hint.
pub fn redact_secret(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    match secret.char_indices().nth(4) {
        Some((idx, _)) if secret.len() > 8 => format!("{}***", &secret[..idx]),
        _ => "***".to_string(),
    }
}

/// Redact a config JSON value, masking every sensitive field.
///
/// The resulting value is safe to log or print from `inkwiz doctor`.
pub fn redact(value: &Value) -> Value {
    redact_recursive(value, "")
}

fn is_sensitive_key(key: &str) -> bool {
    SECRET_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

fn redact_recursive(value: &Value, key: &str) -> Value {
    match value {
        Value::String(s) if is_sensitive_key(key) => Value::String(redact_secret(s)),
        Value::Array(arr) => Value::Array(arr.iter().map(|v| redact_recursive(v, key)).collect()),
        Value::Object(map) => {
            let mut result = serde_json::Map::new();
            for (k, v) in map {
                result.insert(k.clone(), redact_recursive(v, k));
            }
            Value::Object(result)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn redacts_api_key() {
        let v = json!({ "gemini_api_key": "AIzaSyAbcdef123456", "port": 5000 });
        let redacted = redact(&v);
        let key = redacted["gemini_api_key"].as_str().unwrap();
        assert_eq!(key, "AIza***");
        assert_eq!(redacted["port"], 5000);
    }

    #[test]
    fn short_secrets_are_fully_masked() {
        assert_eq!(redact_secret("abc"), "***");
        assert_eq!(redact_secret("abcdefgh"), "***");
        assert_eq!(redact_secret(""), "");
    }

    #[test]
    fn passthrough_non_sensitive() {
        let v = json!({ "log_level": "debug", "gemini_model": "gemini-x" });
        let redacted = redact(&v);
        assert_eq!(redacted["log_level"], "debug");
        assert_eq!(redacted["gemini_model"], "gemini-x");
    }
}
