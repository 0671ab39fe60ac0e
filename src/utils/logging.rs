// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Crate-scoped default so dependency noise stays out of stderr.
pub const DEFAULT_DIRECTIVE: &str = "extractive_summarizer=info";

/// Builds the log filter: `RUST_LOG` when set, otherwise `default_directive`,
/// falling back to plain "info" if that directive does not parse.
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Sets up the logging framework using tracing_subscriber.
/// Logs are written to stderr; stdout is reserved for JSON results.
pub fn setup_logging() {
    fmt()
        .with_env_filter(build_filter(DEFAULT_DIRECTIVE))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("Logging setup complete.");
}
