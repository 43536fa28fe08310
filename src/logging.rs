use tracing::Level;
use tracing_subscriber::EnvFilter;

// hyper logs every connection at debug
const QUIET_TARGETS: &str = "hyper=off";

/// Map a `--log-level` value onto a tracing level; unknown names mean info.
pub fn parse_level(log_level: &str) -> Level {
    match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Filter directives: an explicit level wins, then `RUST_LOG`, then info.
pub fn filter_directives(log_level: Option<&str>, rust_log: Option<&str>) -> String {
    match (log_level, rust_log.filter(|env| !env.trim().is_empty())) {
        (Some(level), _) => format!("{},{}", QUIET_TARGETS, parse_level(level)),
        (None, Some(env)) => env.to_string(),
        (None, None) => format!("{},{}", QUIET_TARGETS, Level::INFO),
    }
}

pub fn setup_logging(log_level: Option<&str>) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(log_level, rust_log.as_deref());

    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter '{}': {}", directives, e);
        EnvFilter::new(format!("{},{}", QUIET_TARGETS, Level::INFO))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();
}
