//! Log output for the `primehunt` binary.
//!
//! Events from the library (worker lifecycle, partition table, config
//! warnings, run summary) are rendered by a `tracing_subscriber::fmt` layer on
//! **stderr**. Stdout is reserved for the banner and the result lines, so the
//! two never interleave mid-line and results can be piped on their own.
//!
//! The level is taken from `RUST_LOG` and defaults to `info`:
//!
//! ```bash
//! RUST_LOG=debug primehunt --threads 8
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_names(true)
                .with_line_number(true)
                .with_target(false)
                .with_timer(fmt::time::ChronoLocal::rfc_3339())
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
