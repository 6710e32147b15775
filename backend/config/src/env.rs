//! Environment variable loading.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Blank values are treated as unset so that `FOO=` in a `.env` file
//! falls back to the default instead of failing to parse.

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use crate::schema::InkwizConfig;

pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const INKWIZ_BIND: &str = "INKWIZ_BIND";
pub const INKWIZ_PORT: &str = "INKWIZ_PORT";
/// Port variable injected by most PaaS hosts; `INKWIZ_PORT` wins when both are set.
pub const PORT: &str = "PORT";
pub const INKWIZ_REQUEST_TIMEOUT_SECS: &str = "INKWIZ_REQUEST_TIMEOUT_SECS";
pub const INKWIZ_MAX_CONCURRENT_REQUESTS: &str = "INKWIZ_MAX_CONCURRENT_REQUESTS";
pub const INKWIZ_SAFETY_FILTERS: &str = "INKWIZ_SAFETY_FILTERS";
pub const INKWIZ_REJECT_EMPTY_TEXT: &str = "INKWIZ_REJECT_EMPTY_TEXT";
pub const INKWIZ_LOG_DIR: &str = "INKWIZ_LOG_DIR";
pub const RUST_LOG: &str = "RUST_LOG";

/// Error returned when a variable is set but cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("Invalid value {value:?} for {var_name}: expected {expected}")]
pub struct EnvParseError {
    pub var_name: String,
    pub value: String,
    pub expected: &'static str,
}

/// Seed the process environment from a `.env` file if one exists.
/// Returns the path that was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

/// Build the config from the current process environment.
pub fn from_env() -> Result<InkwizConfig, EnvParseError> {
    from_vars(&std::env::vars().collect())
}

/// Build the config from a provided map (useful for testing).
pub fn from_vars(vars: &HashMap<String, String>) -> Result<InkwizConfig, EnvParseError> {
    let get = |name: &str| raw(vars, name).map(str::to_string);

    let defaults = InkwizConfig::default();

    let port = match get(INKWIZ_PORT) {
        Some(_) => parse_number(vars, INKWIZ_PORT)?,
        None => parse_number(vars, PORT)?,
    };

    Ok(InkwizConfig {
        bind_address: get(INKWIZ_BIND).unwrap_or(defaults.bind_address),
        port: port.unwrap_or(defaults.port),
        gemini_api_key: vars
            .get(GEMINI_API_KEY)
            .map(|v| v.trim().to_string())
            .unwrap_or_default(),
        gemini_model: get(GEMINI_MODEL).unwrap_or(defaults.gemini_model),
        gemini_base_url: get(GEMINI_BASE_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.gemini_base_url),
        request_timeout_secs: parse_number(vars, INKWIZ_REQUEST_TIMEOUT_SECS)?
            .unwrap_or(defaults.request_timeout_secs),
        max_concurrent_requests: parse_number(vars, INKWIZ_MAX_CONCURRENT_REQUESTS)?
            .unwrap_or(defaults.max_concurrent_requests),
        safety_filters: parse_bool(vars, INKWIZ_SAFETY_FILTERS)?
            .unwrap_or(defaults.safety_filters),
        reject_empty_text: parse_bool(vars, INKWIZ_REJECT_EMPTY_TEXT)?
            .unwrap_or(defaults.reject_empty_text),
        log_dir: get(INKWIZ_LOG_DIR).map(PathBuf::from),
        log_level: get(RUST_LOG).unwrap_or(defaults.log_level),
    })
}

fn raw<'a>(vars: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    vars.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_number<T: FromStr>(
    vars: &HashMap<String, String>,
    name: &str,
) -> Result<Option<T>, EnvParseError> {
    let Some(value) = raw(vars, name) else {
        return Ok(None);
    };
    value.parse().map(Some).map_err(|_| EnvParseError {
        var_name: name.to_string(),
        value: value.to_string(),
        expected: "a non-negative integer",
    })
}

fn parse_bool(vars: &HashMap<String, String>, name: &str) -> Result<Option<bool>, EnvParseError> {
    let Some(value) = raw(vars, name) else {
        return Ok(None);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(EnvParseError {
            var_name: name.to_string(),
            value: value.to_string(),
            expected: "true/false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn defaults_when_unset() {
        let config = from_vars(&env(&[(GEMINI_API_KEY, "AIza-key")])).unwrap();
        assert_eq!(config.gemini_api_key, "AIza-key");
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_concurrent_requests, 16);
        assert!(config.safety_filters);
        assert!(!config.reject_empty_text);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn missing_key_is_empty_not_error() {
        let config = from_vars(&HashMap::new()).unwrap();
        assert!(config.gemini_api_key.is_empty());
    }

    #[test]
    fn inkwiz_port_wins_over_paas_port() {
        let config = from_vars(&env(&[(PORT, "10000"), (INKWIZ_PORT, "8080")])).unwrap();
        assert_eq!(config.port, 8080);
        let config = from_vars(&env(&[(PORT, "10000")])).unwrap();
        assert_eq!(config.port, 10000);
    }

    #[test]
    fn parses_flags_and_limits() {
        let config = from_vars(&env(&[
            (INKWIZ_SAFETY_FILTERS, "off"),
            (INKWIZ_REJECT_EMPTY_TEXT, "TRUE"),
            (INKWIZ_MAX_CONCURRENT_REQUESTS, "4"),
            (INKWIZ_REQUEST_TIMEOUT_SECS, "15"),
            (GEMINI_BASE_URL, "http://localhost:9000/v1beta/"),
        ]))
        .unwrap();
        assert!(!config.safety_filters);
        assert!(config.reject_empty_text);
        assert_eq!(config.max_concurrent_requests, 4);
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.gemini_base_url, "http://localhost:9000/v1beta");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = from_vars(&env(&[(INKWIZ_PORT, "  "), (GEMINI_MODEL, "")])).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.gemini_model, crate::defaults::DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn error_on_unparseable_number() {
        let err = from_vars(&env(&[(INKWIZ_PORT, "eighty")])).unwrap_err();
        assert_eq!(err.var_name, INKWIZ_PORT);
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn error_on_unparseable_bool() {
        let err = from_vars(&env(&[(INKWIZ_SAFETY_FILTERS, "maybe")])).unwrap_err();
        assert_eq!(err.var_name, INKWIZ_SAFETY_FILTERS);
    }
}
