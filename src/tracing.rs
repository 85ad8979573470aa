use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. Level comes from `RUST_LOG`, default `info`.
///
/// Only the binary calls this; the library never installs a subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
