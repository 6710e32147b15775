//! Typed runtime configuration.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::defaults::*;
use crate::redact::redact_secret;

/// Inkwiz runtime configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct InkwizConfig {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Credential for the Gemini API
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Timeout applied to each outbound generation call
    pub request_timeout_secs: u64,
    /// Admission limit for concurrent uploads
    pub max_concurrent_requests: usize,
    /// Send per-category safety thresholds with each call
    pub safety_filters: bool,
    /// Treat an empty `extracted_text` as a client error instead of a success
    pub reject_empty_text: bool,
    /// Directory for the rolling JSON log file; console only when unset
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for InkwizConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            safety_filters: true,
            reject_empty_text: false,
            log_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl InkwizConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl fmt::Debug for InkwizConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InkwizConfig")
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .field("gemini_api_key", &redact_secret(&self.gemini_api_key))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .field("safety_filters", &self.safety_filters)
            .field("reject_empty_text", &self.reject_empty_text)
            .field("log_dir", &self.log_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}
