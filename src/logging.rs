use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Log filter directives, e.g. `SPESE_LOG=spese=debug`.
pub(crate) const LOG_ENV: &str = "SPESE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Send logs to stderr so they never mix with report output on stdout.
/// Calling this more than once is harmless.
pub(crate) fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
