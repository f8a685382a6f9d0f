//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr so the board on stdout stays readable.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output with `verbose`.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
