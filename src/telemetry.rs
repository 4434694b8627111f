//! Opt-in tracing setup for hosts embedding `listing-chart-rs`.
//!
//! Nothing here runs implicitly: hosts either call `init_default_tracing`
//! or install their own `tracing` subscriber and filters.

/// Installs a compact default `tracing` subscriber when the `telemetry`
/// feature is enabled.
///
/// Returns `true` on success, `false` when the feature is disabled or the
/// host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
