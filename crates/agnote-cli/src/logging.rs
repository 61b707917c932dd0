use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins over `level` when it is set and valid.
pub fn init_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // A second call in the same process keeps the first subscriber
    let _ = subscriber.try_init();
}
