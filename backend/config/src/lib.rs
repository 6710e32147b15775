//! `inkwiz-config`: runtime configuration for the Inkwiz service.
//!
//! Provides:
//! - Typed config schema with defaults
//! - Environment loading (with `.env` support)
//! - Startup validation
//! - Secret redaction for safe logging/display

pub mod defaults;
pub mod env;
pub mod redact;
pub mod schema;
pub mod validation;

pub use env::{from_env, from_vars, load_dotenv, EnvParseError};
pub use redact::{redact, redact_secret};
pub use schema::InkwizConfig;
pub use validation::{validate, ConfigValidationError, ValidationReport};

use std::path::PathBuf;

use anyhow::{Context, Result};

/// A config read at startup, plus the `.env` file it was seeded from.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: InkwizConfig,
    pub dotenv_path: Option<PathBuf>,
}

/// Load `.env`, then read the config from the process environment.
///
/// This runs before logging is set up, so it reports the `.env` path to the
/// caller instead of logging it. It does not validate; callers decide how to
/// react to the report from [`validate`].
pub fn load() -> Result<LoadedConfig> {
    let dotenv_path = load_dotenv();
    let config = from_env().context("Failed to read configuration from environment")?;
    Ok(LoadedConfig {
        config,
        dotenv_path,
    })
}
