use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level {
        "off" => Some(LevelFilter::OFF),
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" => Some(LevelFilter::WARN),
        "error" => Some(LevelFilter::ERROR),
        _ => None,
    }
}

/// Log to stderr; stdout carries the report. RUST_LOG overrides `level`.
pub fn init_logging(level: &str) {
    let default_level = parse_level(level);

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.unwrap_or(LevelFilter::WARN).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    if default_level.is_none() {
        tracing::warn!("Invalid log level '{}', defaulting to 'warn'", level);
    }
}
