//! Config validation: startup checks with user-friendly error messages.

use crate::env::GEMINI_API_KEY;
use crate::schema::InkwizConfig;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &InkwizConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_credentials(config, &mut report);
    validate_provider(config, &mut report);
    validate_server(config, &mut report);
    report
}

/// The Gemini credential must be present and non-blank.
fn validate_credentials(config: &InkwizConfig, report: &mut ValidationReport) {
    if config.gemini_api_key.trim().is_empty() {
        report.error(
            "gemini_api_key",
            format!("{GEMINI_API_KEY} missing. Set it in .env or the host environment."),
        );
    }
}

fn validate_provider(config: &InkwizConfig, report: &mut ValidationReport) {
    if config.gemini_model.trim().is_empty() {
        report.error("gemini_model", "Model id cannot be empty");
    }
    let url = &config.gemini_base_url;
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        report.error("gemini_base_url", format!("'{url}' is not an http(s) URL"));
    } else if url.starts_with("http://") {
        report.warn(
            "gemini_base_url",
            "Plain http endpoint; the API key will travel unencrypted",
        );
    }
    if config.request_timeout_secs == 0 {
        report.error("request_timeout_secs", "Timeout must be > 0");
    }
}

fn validate_server(config: &InkwizConfig, report: &mut ValidationReport) {
    if config.max_concurrent_requests == 0 {
        report.error(
            "max_concurrent_requests",
            "Limit must be > 0 or every upload would be rejected",
        );
    }
    if config.port == 0 {
        report.warn("port", "Port 0 binds an ephemeral port chosen by the OS");
    } else if config.port < 1024 && config.port != 80 && config.port != 443 {
        report.warn(
            "port",
            format!(
                "Port {} requires elevated privileges; consider using a port >= 1024",
                config.port
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> InkwizConfig {
        InkwizConfig {
            gemini_api_key: "AIza-test".into(),
            ..Default::default()
        }
    }

    #[test]
    fn default_with_key_is_valid() {
        let report = validate(&valid());
        assert!(report.is_valid(), "{:?}", report.errors);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_key_is_error() {
        let report = validate(&InkwizConfig::default());
        assert!(!report.is_valid());
        assert_eq!(report.errors[0].path, "gemini_api_key");
        assert!(report.errors[0].message.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn blank_key_is_error() {
        let config = InkwizConfig {
            gemini_api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!validate(&config).is_valid());
    }

    #[test]
    fn zero_limits_are_errors() {
        let config = InkwizConfig {
            request_timeout_secs: 0,
            max_concurrent_requests: 0,
            ..valid()
        };
        let report = validate(&config);
        let paths: Vec<_> = report.errors.iter().map(|e| e.path.as_str()).collect();
        assert!(paths.contains(&"request_timeout_secs"));
        assert!(paths.contains(&"max_concurrent_requests"));
    }

    #[test]
    fn bad_base_url_is_error() {
        let config = InkwizConfig {
            gemini_base_url: "generativelanguage.googleapis.com".into(),
            ..valid()
        };
        assert!(!validate(&config).is_valid());
    }

    #[test]
    fn privileged_port_warns() {
        let config = InkwizConfig { port: 81, ..valid() };
        let report = validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings[0].path, "port");
    }
}
