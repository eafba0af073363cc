//! Tracing subscriber setup.
//!
//! Logs go to stderr so that `--format json` / `--format csv` output on
//! stdout stays machine-readable.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::schema::{LogFormat, LoggingConfig};

/// Filter directive for the configured level, scoped to this crate.
fn default_directive(level: &str, verbose: bool) -> String {
    let level = if verbose { "debug" } else { level };
    format!("aiportfolio={level},warn")
}

/// Install the global subscriber. `RUST_LOG` wins over the config level.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&config.level, verbose)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_uses_config_level() {
        assert_eq!(default_directive("warn", false), "aiportfolio=warn,warn");
        assert_eq!(default_directive("warn", true), "aiportfolio=debug,warn");
    }

    #[test]
    fn init_twice_does_not_panic() {
        let config = LoggingConfig::default();
        init(&config, false);
        init(&config, true);
    }
}
