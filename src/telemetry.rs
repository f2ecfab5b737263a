//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! Behavior:
//! - LOG_LEVEL controls the filter (e.g. "debug" or detailed directives like
//!   "info,catalog=debug,vestibular_bank=debug").
//! - LOG_FORMAT selects "pretty" (default) or "json" structured logs.
//!
//! Notes:
//! - Targets are included to tell catalog inventory apart from loader messages.
//! - Logs go to stderr; stdout carries the JSON report.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    // Catalog inventory is debug-friendly by default; LOG_LEVEL overrides everything.
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info,vestibular_bank=debug,catalog=debug"));

    // Single fmt builder; the writer is stderr so `vestibular-report | jq` keeps working.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    // JSON vs pretty; the two builders have different types, so init in each arm.
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => {
            builder.json().init();
        }
        _ => {
            builder.init();
        }
    }
}
