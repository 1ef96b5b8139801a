// Main entry point - Dependency injection and a single modem_ctrl query
use std::process::ExitCode;
use std::sync::Arc;

use modem_info::application::extractor::ModemInfoExtractor;
use modem_info::domain::field_schema::FIELD_SCHEMA_VERSION;
use modem_info::infrastructure::config::load_app_config;
use modem_info::infrastructure::logging::init_logging;
use modem_info::infrastructure::modem_ctrl::ModemCtrlSource;
use modem_info::presentation::output::write_outcome;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Load configuration
    let config = load_app_config()?;

    // Initialize tracing
    init_logging(&config.log_level);
    tracing::debug!(
        "Querying {} (field schema v{})",
        config.command.program,
        FIELD_SCHEMA_VERSION
    );

    // Create source (infrastructure layer) and extractor (application layer)
    let source = Arc::new(ModemCtrlSource::new(&config.command));
    let extractor = ModemInfoExtractor::new(source, config.markers.clone());

    let result = extractor.get_modem_info().await;

    // Print (presentation layer)
    let outcome = write_outcome(&mut std::io::stdout().lock(), result)?;

    Ok(outcome.exit_code())
}
