//! Logging initialization and configuration.
//!
//! Uses the `tracing` ecosystem. Diagnostics go to stderr so that stdout
//! only carries the image report.

use crate::context::VerbosityLevel;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the logging subsystem.
///
/// The RUST_LOG environment variable overrides the level derived from
/// `verbosity`.
pub fn init(verbosity: VerbosityLevel, json_format: bool, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.as_filter()));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr)
                    .with_ansi(ansi),
            )
            .init();
    }
}
