/// Initializes structured logging for the whole actor system.
///
/// Verbosity is controlled through the `RUST_LOG` environment variable:
///
/// - `RUST_LOG=info` - actor starts/stops, created list servers
/// - `RUST_LOG=debug` - every message each actor processes
/// - `RUST_LOG=listkeeper=debug` - debug for this crate only
///
/// Call once, early; a second call panics inside the subscriber, so tests
/// that want logs should set the subscriber themselves.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
