//! Configuration file loading with precedence handling.

use crate::model::PageSize;
use crate::shell::DEFAULT_TITLE_WIDTH;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CATALOG_VIEW_CONFIG";

/// Environment variable overriding the page size.
pub const PAGE_SIZE_ENV_VAR: &str = "CATALOG_VIEW_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {}: {reason}", .path.display())]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or values.
    #[error("Invalid TOML in {}: {reason}", .path.display())]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/catalog-view/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Products added per "load more". Zero is rejected while parsing.
    #[serde(default)]
    pub page_size: Option<PageSize>,

    /// Display width of the title column.
    #[serde(default)]
    pub title_width: Option<usize>,

    /// Ask before deleting a product.
    #[serde(default)]
    pub confirm_delete: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Page size.
    pub page_size: PageSize,
    /// Title column width.
    pub title_width: usize,
    /// Delete confirmation prompt.
    pub confirm_delete: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            title_width: DEFAULT_TITLE_WIDTH,
            confirm_delete: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Flags given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--page-size`.
    pub page_size: Option<PageSize>,
    /// `--yes` disables confirmation.
    pub confirm_delete: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/catalog-view/catalog-view.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("catalog-view").join("catalog-view.log")
    } else {
        PathBuf::from("catalog-view.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors, including a
/// `page_size` of zero.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/catalog-view/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("catalog-view").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CATALOG_VIEW_CONFIG` environment variable
/// 3. Default path `~/.config/catalog-view/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CATALOG_VIEW_PAGE_SIZE`: Override page size (ignored if not a positive integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(page_size) = std::env::var(PAGE_SIZE_ENV_VAR)
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .and_then(|raw| PageSize::new(raw).ok())
    {
        config.page_size = page_size;
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        title_width: config.title_width.unwrap_or(defaults.title_width),
        confirm_delete: config.confirm_delete.unwrap_or(defaults.confirm_delete),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    if let Some(confirm) = cli.confirm_delete {
        config.confirm_delete = confirm;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
