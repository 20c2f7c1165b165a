//! Logging configuration for clipguard.
//!
//! Thin wrapper over the tracing-based logging stack: callers pick a
//! [`Verbosity`] and the `RUST_LOG` environment variable can still override
//! the resulting filter.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Verbosity level for logging output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Debug and above.
    Verbose,
    /// Everything, including per-parameter trace output.
    Trace,
}

impl Verbosity {
    /// The maximum [`Level`] this verbosity lets through.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Called once at application startup. `RUST_LOG` takes precedence over
/// `verbosity`. Repeated calls are harmless; only the first installs a
/// subscriber.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("clipguard={}", verbosity.level())));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}
