//! Vestibular question bank report.
//!
//! Builds the catalog (built-in content plus an optional TOML bank), logs the
//! inventory and any integrity findings, then prints JSON on stdout.
//!
//! Important env variables:
//!   VESTIBULAR_BANK_PATH : path to a TOML bank extending the built-in catalog
//!   VESTIBULAR_REPORT    : "stats" (default) or "catalog" for the full export
//!   LOG_LEVEL            : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT           : "pretty" (default) or "json"

use tracing::{info, instrument, warn};

use vestibular_bank::protocol::CatalogExport;
use vestibular_bank::{telemetry, Catalog};

#[instrument(level = "info", skip_all)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    let catalog = Catalog::from_env();

    let issues = catalog.issues();
    for issue in &issues {
        warn!(target: "catalog", %issue, "Catalog integrity finding");
    }
    info!(target: "vestibular_bank", questions = catalog.len(), issues = issues.len(), "Catalog ready");

    let out = match std::env::var("VESTIBULAR_REPORT").as_deref() {
        Ok("catalog") => serde_json::to_string_pretty(&CatalogExport::from(&catalog))?,
        _ => serde_json::to_string_pretty(catalog.stats())?,
    };
    println!("{out}");
    Ok(())
}
