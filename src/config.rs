//! Configuration management for task-requests
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_DURATION_DAYS, DEFAULT_SIMULATED_LATENCY_MS,
    DEFAULT_TRACKING_HOST, MAX_DURATION_DAYS, MAX_SIMULATED_LATENCY_MS,
};
use crate::ui::components::select::SelectOption;
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub tracking: TrackingConfig,
    pub form: FormConfig,
    pub display: DisplayConfig,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Where tracking links point to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    /// Host of the dashboard serving `/taskRequests/details/`
    pub host: String,
}

/// Task request form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Days between the default start and end dates
    pub default_duration_days: u32,
    /// Options offered by the request type dropdown
    pub request_types: Vec<SelectOption>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format used in the status line
    pub date_format: String,
}

/// Backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Artificial delay of the in-memory backend, in milliseconds
    pub simulated_latency_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { mouse_enabled: true }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_TRACKING_HOST.to_string(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_duration_days: DEFAULT_DURATION_DAYS,
            request_types: vec![
                SelectOption::new("Assignment", "ASSIGNMENT"),
                SelectOption::new("Creation", "CREATION"),
            ],
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::INPUT_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
        }
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
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let host = &self.tracking.host;
        if host.is_empty() {
            anyhow::bail!("tracking.host cannot be empty");
        }
        if host.contains('/') || host.chars().any(char::is_whitespace) {
            anyhow::bail!("tracking.host must be a bare host name, got '{}'", host);
        }

        if self.form.default_duration_days == 0 || self.form.default_duration_days > MAX_DURATION_DAYS {
            anyhow::bail!(
                "default_duration_days must be between 1 and {}, got {}",
                MAX_DURATION_DAYS,
                self.form.default_duration_days
            );
        }

        self.validate_request_types()?;

        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }

        if self.backend.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            anyhow::bail!(
                "simulated_latency_ms cannot exceed {} ms",
                MAX_SIMULATED_LATENCY_MS
            );
        }

        Ok(())
    }

    /// Option keys must be non-empty and unique within the list
    fn validate_request_types(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for option in &self.form.request_types {
            if option.label.is_empty() {
                anyhow::bail!("request type '{}': label cannot be empty", option.value);
            }
            if option.value.is_empty() {
                anyhow::bail!("request type '{}': value cannot be empty", option.label);
            }
            if !seen.insert(option.value.as_str()) {
                anyhow::bail!("duplicate request type value '{}'", option.value);
            }
        }
        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# task-requests configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::INPUT_DATE_FORMAT)
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
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
