//! Configuration management for pokedeck
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    ASIDE_DEFAULT_WIDTH, ASIDE_MAX_WIDTH, ASIDE_MIN_WIDTH, CONFIG_GENERATED, DEFAULT_ALLOW_LIST, DEFAULT_API_BASE_URL,
    DEFAULT_MIN_LATENCY_MS, DEFAULT_ROSTER_NAMES, DEFAULT_TIMEOUT_SECS, MAX_MIN_LATENCY_MS, MAX_TIMEOUT_SECS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub form: FormConfig,
    pub roster: RosterConfig,
    pub logging: LoggingConfig,
}

/// PokeAPI client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST API, without trailing slash
    pub base_url: String,
    /// Delay applied after a successful fetch before the data is shown
    pub min_latency_ms: u64,
    /// Per-request timeout in seconds, 0 for none
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Screen shown on startup
    /// Options: "color", "roster", "form", "lookup"
    pub default_screen: String,
    /// Aside (pokemon list) width in columns
    pub aside_width: u16,
}

/// Validated form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Names accepted by the form, matched exactly
    pub allow_list: Vec<String>,
}

/// Roster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub initial_names: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            min_latency_ms: DEFAULT_MIN_LATENCY_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn min_latency(&self) -> Duration {
        Duration::from_millis(self.min_latency_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_screen: "lookup".to_string(),
            aside_width: ASIDE_DEFAULT_WIDTH,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            allow_list: DEFAULT_ALLOW_LIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            initial_names: DEFAULT_ROSTER_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level into a `log` filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("pokedeck.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("pokedeck").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url cannot be empty");
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            anyhow::bail!("api.base_url must be an http(s) URL, got '{}'", self.api.base_url);
        }

        if self.api.min_latency_ms > MAX_MIN_LATENCY_MS {
            anyhow::bail!("api.min_latency_ms cannot exceed {}", MAX_MIN_LATENCY_MS);
        }

        if self.api.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "api.timeout_secs must be between 0 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.api.timeout_secs
            );
        }

        if self.ui.aside_width < ASIDE_MIN_WIDTH || self.ui.aside_width > ASIDE_MAX_WIDTH {
            anyhow::bail!(
                "aside_width must be between {} and {} columns, got {}",
                ASIDE_MIN_WIDTH,
                ASIDE_MAX_WIDTH,
                self.ui.aside_width
            );
        }

        let valid_screens = ["color", "roster", "form", "lookup"];
        if !valid_screens.contains(&self.ui.default_screen.as_str()) {
            anyhow::bail!(
                "Invalid default_screen '{}'. Expected one of: {}",
                self.ui.default_screen,
                valid_screens.join(", ")
            );
        }

        let mut seen = std::collections::HashSet::new();
        for name in &self.roster.initial_names {
            if name.trim().is_empty() {
                anyhow::bail!("roster.initial_names cannot contain blank names");
            }
            if !seen.insert(name.as_str()) {
                anyhow::bail!("roster.initial_names contains '{}' more than once", name);
            }
        }

        if self.form.allow_list.is_empty() {
            anyhow::bail!("form.allow_list cannot be empty");
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# pokedeck Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("pokedeck"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
