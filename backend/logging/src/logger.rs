//! Structured Logger
//!
//! Wraps `tracing` to provide console output, optional daily-rolling NDJSON
//! files, and environment-based level control.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global structured logger.
///
/// `RUST_LOG` overrides `level` when set. When `log_dir` is given, a JSON
/// layer also writes to `<log_dir>/inkwiz.log.YYYY-MM-DD`. Calling this twice
/// is harmless; the second call is ignored. A log directory that cannot be
/// created disables the file layer instead of failing startup.
pub fn init_logger(level: &str, log_dir: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_ansi(true);

    let file_layer = log_dir.and_then(|dir| {
        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("inkwiz.log")
            .build(dir)
            .map_err(|e| eprintln!("File logging disabled ({}): {e}", dir.display()))
            .ok()?;
        Some(
            fmt::layer()
                .json()
                .with_writer(file_appender)
                .with_ansi(false),
        )
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();
}
