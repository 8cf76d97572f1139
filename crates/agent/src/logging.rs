use tracing_subscriber::EnvFilter;

/// Structured logs on stderr, filtered by `RUST_LOG` (default `warn`).
/// Stdout is reserved for the answer.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed (tests); keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
