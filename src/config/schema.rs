/// Configuration schema and defaults for aiportfolio.
///
/// Defines the TOML-serializable configuration structure with all sections:
/// `[server]`, `[catalog]`, `[display]`, `[filler]`, and `[logging]`.
///
/// Every field has a sensible built-in default. Users only need to set the
/// values they want to override.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level aiportfolio configuration.
///
/// Maps directly to the `~/.aiportfolio/config.toml` and `.aiportfolio.toml`
/// file schemas. All sections and fields are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub display: DisplayConfig,
    pub filler: FillerConfig,
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// [server]
// ---------------------------------------------------------------------------

/// Embedded web dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address for `aiportfolio serve`.
    pub addr: String,
    /// Open the dashboard in the default browser on start.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:9870".to_string(),
            open_browser: true,
        }
    }
}

// ---------------------------------------------------------------------------
// [catalog]
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a catalog TOML file. Empty means the built-in catalog.
    /// `~` is expanded to the home directory.
    pub path: String,
}

impl CatalogConfig {
    /// The configured catalog file, if any.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        let path = self.path.trim();
        if path.is_empty() {
            return None;
        }
        if let Some(rest) = path.strip_prefix("~/")
            && let Some(home) = dirs::home_dir()
        {
            return Some(home.join(rest));
        }
        Some(PathBuf::from(path))
    }
}

// ---------------------------------------------------------------------------
// [display]
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows shown in "top N" tables.
    pub top_n: usize,
    /// Decimal places for USD-million amounts.
    pub currency_decimals: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_n: 15,
            currency_decimals: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// [filler]
// ---------------------------------------------------------------------------

/// Simulated display metrics (F1, latency, monthly trends).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FillerConfig {
    /// Seed for the deterministic generator. Same seed, same numbers.
    pub seed: u64,
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

// ---------------------------------------------------------------------------
// [logging]
// ---------------------------------------------------------------------------

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

impl AppConfig {
    /// Annotated default config written by `aiportfolio config init`.
    pub fn default_toml() -> String {
        r#"# aiportfolio Configuration
#
# Configuration hierarchy (highest precedence wins):
#   1. Environment variables (AIPORTFOLIO_*)
#   2. Project config (.aiportfolio.toml in current directory)
#   3. User global config (~/.aiportfolio/config.toml)
#   4. Built-in defaults

[server]
addr = "127.0.0.1:9870"
open_browser = true

[catalog]
# Path to a catalog TOML file. Leave empty for the built-in catalog.
path = ""

[display]
top_n = 15
currency_decimals = 1

[filler]
# Seed for simulated display metrics (F1 score, latency, trends).
seed = 42

[logging]
level = "info"      # error | warn | info | debug | trace
format = "compact"  # compact | json
"#
        .to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toml_parses_to_defaults() {
        let parsed: AppConfig = toml::from_str(&AppConfig::default_toml()).unwrap();
        let defaults = AppConfig::default();
        assert_eq!(parsed.server.addr, defaults.server.addr);
        assert_eq!(parsed.display.top_n, defaults.display.top_n);
        assert_eq!(parsed.filler.seed, defaults.filler.seed);
        assert_eq!(parsed.logging.format, LogFormat::Compact);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[filler]
seed = 7
"#,
        )
        .unwrap();
        assert_eq!(config.filler.seed, 7);
        assert_eq!(config.server.addr, "127.0.0.1:9870");
        assert!(config.catalog.resolved_path().is_none());
    }

    #[test]
    fn catalog_path_expands_home() {
        let config = CatalogConfig {
            path: "~/catalogs/bank.toml".to_string(),
        };
        let resolved = config.resolved_path().unwrap();
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolved, home.join("catalogs/bank.toml"));
        }
    }

    #[test]
    fn json_log_format_parses() {
        let config: AppConfig = toml::from_str(
            r#"
[logging]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}
