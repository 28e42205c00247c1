//! Tracing setup for applications embedding `chart-options`.
//!
//! Events are emitted under the module targets of this crate:
//! `chart_options::scriptable` reports proxy fallbacks (chart/axis mismatch,
//! rejected callback results) at `trace` and option switches at `debug`,
//! `chart_options::config` reports axis creation and registry changes, and
//! `chart_options::engine` reports tick passes, axis updates and
//! non-string label results (`warn`).

/// Filter used when `RUST_LOG` is unset: host crates at `warn`, this crate at `info`.
pub const DEFAULT_DIRECTIVE: &str = "warn,chart_options=info";

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG` and falls back to [`DEFAULT_DIRECTIVE`].
/// Returns `false` when the feature is disabled or a global subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
