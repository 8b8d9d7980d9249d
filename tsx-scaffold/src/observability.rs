//! Logging setup
//!
//! The library emits `tracing` events; binaries call [`init`] once to print them
//! on stderr. `RUST_LOG` always wins over the configured verbosity.

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// 0 = warnings, 1 = info, 2 or more = debug
    pub verbosity: u8,

    /// Emit JSON lines instead of human readable output
    pub json: bool,
}

impl ObservabilityConfig {
    /// Create a config with the given verbosity
    #[must_use]
    pub const fn new(verbosity: u8) -> Self {
        Self {
            verbosity,
            json: false,
        }
    }

    /// Switch to JSON output
    #[must_use]
    pub const fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Filter directive used when `RUST_LOG` is not set
    #[must_use]
    pub const fn default_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info,tsx_scaffold=info",
            _ => "debug,tsx_scaffold=trace",
        }
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    }
}
