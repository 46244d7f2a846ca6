//! Tracing bootstrap for hosts and tests.

/// Default filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "error,swipe_ui=info,swipe_components=info";

/// Installs a global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when it parses, otherwise
/// [`DEFAULT_FILTER`]. Calling this more than once is harmless: later calls
/// leave the first subscriber in place.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .try_init();
}
