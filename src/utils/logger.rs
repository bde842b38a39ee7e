use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install a compact fmt subscriber driven by `RUST_LOG`.
///
/// Safe to call more than once: later calls leave the first subscriber in place.
pub fn setup_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init();
}
