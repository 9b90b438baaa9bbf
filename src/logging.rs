use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// Events go to stderr so stdout can carry CSV or JSON output. The filter
/// comes from `RUST_LOG` and defaults to `info`. If a global subscriber is
/// already set, the existing one is kept and the failure is logged through it.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init();

    if let Err(e) = result {
        tracing::warn!("Tracing subscriber not installed: {e}");
    }
}
