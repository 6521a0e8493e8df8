//! Logging initialisation.
//!
//! Installs a `tracing` subscriber with an env-filter and either a
//! human-readable or a JSON formatter.

use crate::{CachetError, CachetResult};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-field human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = CachetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(CachetError::Configuration(format!(
                "Unknown log format: '{}' (valid: pretty, json)",
                other
            ))),
        }
    }
}

/// Builds the filter used when `RUST_LOG` is unset.
///
/// The configured level applies to every target, including the Cachet crates.
#[must_use]
pub fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::new(level)
}

/// Initialises the global subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logging(level: &str, format: LogFormat) -> CachetResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level_filter(level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
    };

    result.map_err(|e| CachetError::internal(format!("Failed to install log subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_format() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_configured_level_applies_to_cachet_targets() {
        let subscriber = tracing_subscriber::registry().with(level_filter("warn"));

        tracing::subscriber::with_default(subscriber, || {
            assert!(!tracing::event_enabled!(
                target: "cachet_cache::client",
                tracing::Level::DEBUG
            ));
            assert!(!tracing::event_enabled!(
                target: "cachet_server::router",
                tracing::Level::INFO
            ));
            assert!(tracing::event_enabled!(
                target: "cachet_cache::connector",
                tracing::Level::WARN
            ));
        });
    }

    #[test]
    fn test_debug_level_enables_cachet_targets() {
        let subscriber = tracing_subscriber::registry().with(level_filter("debug"));

        tracing::subscriber::with_default(subscriber, || {
            assert!(tracing::event_enabled!(
                target: "cachet_cache::client",
                tracing::Level::DEBUG
            ));
        });
    }

    #[test]
    fn test_second_init_is_an_error() {
        let _ = init_logging("info", LogFormat::Pretty);
        assert!(init_logging("info", LogFormat::Json).is_err());
    }
}
