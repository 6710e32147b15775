//! CLI Doctor Command
//!
//! Validates the configuration without starting the server.

use inkwiz_config::{redact, validate, InkwizConfig};

/// Print the validation report and the redacted config. Returns whether the
/// config is good enough to serve with.
pub fn run(config: &InkwizConfig) -> bool {
    println!("\nRunning Inkwiz doctor...\n");

    let report = validate(config);
    for error in &report.errors {
        println!("  [error] {}: {}", error.path, error.message);
    }
    for warning in &report.warnings {
        println!("  [warn]  {}: {}", warning.path, warning.message);
    }

    match serde_json::to_value(config) {
        Ok(value) => {
            let redacted = redact(&value);
            let pretty = serde_json::to_string_pretty(&redacted).unwrap_or_default();
            println!("\nEffective configuration:\n{pretty}");
        }
        Err(e) => println!("\nCould not render configuration: {e}"),
    }

    println!();
    if report.is_valid() {
        println!("All checks passed.");
    } else {
        println!("{} check(s) failed. Fix the errors above.", report.errors.len());
    }
    report.is_valid()
}
