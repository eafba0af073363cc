/// Configuration system for aiportfolio.
///
/// Provides a layered configuration hierarchy:
///
/// 1. **Built-in defaults**: hardcoded in [`schema::AppConfig::default()`]
/// 2. **User global config**: `~/.aiportfolio/config.toml`
/// 3. **Project local config**: `.aiportfolio.toml` in the current working directory
/// 4. **Environment variables**: `AIPORTFOLIO_*` overrides (highest precedence)
///
/// Later layers override earlier ones. Missing sections in a TOML file fall
/// back to built-in defaults.
///
/// # Usage
///
/// ```rust,ignore
/// use aiportfolio::config;
///
/// let cfg = config::load();
/// let catalog = Catalog::load(cfg.catalog.resolved_path().as_deref())?;
/// ```
pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use schema::AppConfig;

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// A config file that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// `None` when the merged layers failed rather than a single file.
    pub path: Option<PathBuf>,
    pub error: String,
}

/// Resolved configuration plus the diagnostics gathered on the way.
///
/// Loading happens before the log subscriber exists, so warnings are
/// collected here and emitted with [`LoadedConfig::log_warnings`] once
/// logging is up.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadedConfig {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            match &warning.path {
                Some(path) => tracing::warn!(
                    path = %path.display(),
                    error = %warning.error,
                    "ignoring malformed config file"
                ),
                None => tracing::warn!(
                    error = %warning.error,
                    "merged config is invalid, using defaults"
                ),
            }
        }
    }
}

/// Load the fully resolved configuration, logging any skipped files.
///
/// Merges all layers in order: defaults → global TOML → project TOML → env
/// vars. Use [`load_layered`] instead when no subscriber is installed yet.
pub fn load() -> AppConfig {
    let loaded = load_layered();
    loaded.log_warnings();
    loaded.config
}

/// Load the fully resolved configuration without logging.
pub fn load_layered() -> LoadedConfig {
    load_from_paths(global_config_path(), project_config_path())
}

fn load_from_paths(global: Option<PathBuf>, project: Option<PathBuf>) -> LoadedConfig {
    let mut warnings = Vec::new();

    // Layer 1: built-in defaults (an empty table deserializes to them)
    let mut merged = toml::Value::Table(toml::Table::new());

    // Layer 2: user global config (~/.aiportfolio/config.toml)
    if let Some(global) = load_toml_file(global, &mut warnings) {
        merge_config(&mut merged, global);
    }

    // Layer 3: project local config (.aiportfolio.toml)
    if let Some(project) = load_toml_file(project, &mut warnings) {
        merge_config(&mut merged, project);
    }

    let mut config = merged.try_into::<AppConfig>().unwrap_or_else(|e| {
        warnings.push(ConfigWarning {
            path: None,
            error: e.to_string(),
        });
        AppConfig::default()
    });

    // Layer 4: environment variable overrides
    apply_env_overrides(&mut config);

    LoadedConfig { config, warnings }
}

/// Load a TOML config file from the given path (if it exists).
///
/// Returns `None` if the path is `None`, the file doesn't exist, or the
/// content does not fit the schema. A broken config file must not stop the
/// dashboard from starting, so malformed files are skipped and recorded.
fn load_toml_file(
    path: Option<PathBuf>,
    warnings: &mut Vec<ConfigWarning>,
) -> Option<toml::Value> {
    let path = path?;
    let content = fs::read_to_string(&path).ok()?;
    let checked = toml::from_str::<AppConfig>(&content)
        .and_then(|_| toml::from_str::<toml::Value>(&content));
    match checked {
        Ok(value) => Some(value),
        Err(e) => {
            warnings.push(ConfigWarning {
                path: Some(path),
                error: e.to_string(),
            });
            None
        }
    }
}

/// Merge a config layer into the base, key by key.
///
/// Tables merge recursively; any other overlay value replaces the base
/// value. Keys the overlay does not mention keep their earlier value.
fn merge_config(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) if existing.is_table() && value.is_table() => {
                        merge_config(existing, value);
                    }
                    _ => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

// ---------------------------------------------------------------------------
// File paths
// ---------------------------------------------------------------------------

/// Path to the user global config: `~/.aiportfolio/config.toml`.
fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".aiportfolio").join("config.toml"))
}

/// Path to the project local config: `.aiportfolio.toml` in the current directory.
fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(".aiportfolio.toml"))
}

/// Return the path to the global config file for display/init purposes.
pub fn global_config_file() -> Option<PathBuf> {
    global_config_path()
}

/// Return the path to the project config file for display purposes.
pub fn project_config_file() -> Option<PathBuf> {
    project_config_path()
}

// ---------------------------------------------------------------------------
// Environment variable overrides
// ---------------------------------------------------------------------------

/// Apply environment variable overrides (highest precedence layer).
///
/// Supported variables:
/// - `AIPORTFOLIO_ADDR`: dashboard listen address
/// - `AIPORTFOLIO_CATALOG`: catalog TOML path
/// - `AIPORTFOLIO_SEED`: filler metrics seed
/// - `AIPORTFOLIO_LOG`: log level
/// - `AIPORTFOLIO_LOG_FORMAT`: `compact` or `json`
fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(val) = std::env::var("AIPORTFOLIO_ADDR")
        && !val.is_empty()
    {
        config.server.addr = val;
    }
    if let Ok(val) = std::env::var("AIPORTFOLIO_CATALOG") {
        config.catalog.path = val;
    }
    if let Ok(val) = std::env::var("AIPORTFOLIO_SEED")
        && let Ok(seed) = val.parse::<u64>()
    {
        config.filler.seed = seed;
    }
    if let Ok(val) = std::env::var("AIPORTFOLIO_LOG")
        && !val.is_empty()
    {
        config.logging.level = val;
    }
    if let Ok(val) = std::env::var("AIPORTFOLIO_LOG_FORMAT")
        && let Some(format) = parse_log_format(&val)
    {
        config.logging.format = format;
    }
}

/// Check if a string value represents a truthy boolean.
fn is_truthy(val: &str) -> bool {
    matches!(
        val.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_log_format(val: &str) -> Option<schema::LogFormat> {
    match val.to_ascii_lowercase().as_str() {
        "compact" | "text" => Some(schema::LogFormat::Compact),
        "json" => Some(schema::LogFormat::Json),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Config init / set / reset
// ---------------------------------------------------------------------------

/// Write the default annotated config to `~/.aiportfolio/config.toml`.
///
/// Returns an error if the file already exists (use `force = true` to
/// overwrite).
pub fn init_config(force: bool) -> Result<PathBuf> {
    let path = global_config_path().context("could not determine home directory")?;
    init_config_at(&path, force)?;
    Ok(path)
}

fn init_config_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }

    fs::write(path, AppConfig::default_toml()).context("failed to write config file")?;
    Ok(())
}

/// Set a single config key to a value in the global config file.
///
/// Supports dotted keys like `server.addr`. The existing value's TOML type
/// decides how `value` is parsed.
pub fn set_config_value(key: &str, value: &str) -> Result<()> {
    let path = global_config_path().context("could not determine home directory")?;
    set_config_value_at(&path, key, value)
}

fn set_config_value_at(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut value_table: toml::Value = if path.exists() {
        let content = fs::read_to_string(path).context("failed to read config file")?;
        toml::from_str(&content).context("failed to parse config as TOML value")?
    } else {
        let defaults = toml::to_string_pretty(&AppConfig::default())
            .context("failed to serialize default config")?;
        toml::from_str(&defaults).context("failed to parse serialized defaults")?
    };

    set_toml_value(&mut value_table, key, value)?;

    // The result must still deserialize, e.g. no `logging.format = "xml"`.
    let output =
        toml::to_string_pretty(&value_table).context("failed to serialize updated config")?;
    toml::from_str::<AppConfig>(&output)
        .with_context(|| format!("invalid value '{value}' for '{key}'"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }
    fs::write(path, output).context("failed to write config file")?;

    Ok(())
}

/// Set a value in a TOML value tree using a dotted key path.
fn set_toml_value(root: &mut toml::Value, key: &str, raw_value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    if parts.iter().any(|p| p.is_empty()) {
        anyhow::bail!("empty config key segment in '{key}'");
    }

    // Navigate to the parent table
    let mut current = root;
    for &part in &parts[..parts.len() - 1] {
        current = current
            .get_mut(part)
            .with_context(|| format!("config key not found: section '{part}' in '{key}'"))?;
    }

    let leaf = parts[parts.len() - 1];

    let table = current.as_table_mut().with_context(|| {
        format!(
            "expected table at '{}'",
            key.rsplit_once('.').map(|(s, _)| s).unwrap_or("")
        )
    })?;

    let existing = table
        .get(leaf)
        .with_context(|| format!("config key not found: '{key}'"))?;
    let new_value = match existing {
        toml::Value::Boolean(_) => toml::Value::Boolean(is_truthy(raw_value)),
        toml::Value::Integer(_) => {
            let n: i64 = raw_value
                .parse()
                .with_context(|| format!("expected integer for '{key}', got '{raw_value}'"))?;
            toml::Value::Integer(n)
        }
        toml::Value::Float(_) => {
            let f: f64 = raw_value
                .parse()
                .with_context(|| format!("expected float for '{key}', got '{raw_value}'"))?;
            toml::Value::Float(f)
        }
        _ => toml::Value::String(raw_value.to_string()),
    };

    table.insert(leaf.to_string(), new_value);
    Ok(())
}

/// Reset the global config to defaults (overwrite the file).
pub fn reset_config() -> Result<PathBuf> {
    init_config(true)
}

/// Show the effective (fully resolved) config as TOML.
pub fn show_effective_config() -> Result<String> {
    let config = load();
    toml::to_string_pretty(&config).context("failed to serialize effective config")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
