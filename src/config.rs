//! Configuration management for TMan
//!
//! This module handles loading, parsing, and validation of configuration files,
//! and resolves the per-user config and log directories.

use crate::constants::{
    APP_NAME, LOCAL_CONFIG_FILE, REPORT_DEFAULT_WIDTH, REPORT_MAX_WIDTH, REPORT_MIN_WIDTH, TICK_RATE_DEFAULT_MS,
    TICK_RATE_MAX_MS, TICK_RATE_MIN_MS,
};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub form: FormConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Report panel width in columns
    pub report_width: u16,
    /// Idle wait between input polls, in milliseconds
    pub tick_rate_ms: u64,
}

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Options offered by the choice dropdown, in display order
    pub choices: Vec<String>,
    /// Option selected on startup
    pub default_choice: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Minimum level written: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            report_width: REPORT_DEFAULT_WIDTH,
            tick_rate_ms: TICK_RATE_DEFAULT_MS,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            choices: vec!["Option_1".to_string(), "Option_2".to_string()],
            default_choice: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

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
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        Self::get_default_config_path().ok().filter(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.report_width < REPORT_MIN_WIDTH || self.ui.report_width > REPORT_MAX_WIDTH {
            anyhow::bail!(
                "report_width must be between {} and {} columns, got {}",
                REPORT_MIN_WIDTH,
                REPORT_MAX_WIDTH,
                self.ui.report_width
            );
        }

        if self.ui.tick_rate_ms < TICK_RATE_MIN_MS || self.ui.tick_rate_ms > TICK_RATE_MAX_MS {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        self.validate_form()?;
        self.logging.level_filter()?;

        Ok(())
    }

    /// Validate the dropdown choices so the form can always be built
    fn validate_form(&self) -> Result<()> {
        if self.form.choices.is_empty() {
            anyhow::bail!("form.choices cannot be empty");
        }

        let mut seen = HashSet::new();
        for choice in &self.form.choices {
            if choice.is_empty() {
                anyhow::bail!("form.choices cannot contain empty entries");
            }
            if !seen.insert(choice.as_str()) {
                anyhow::bail!("form.choices contains '{}' more than once", choice);
            }
        }

        if let Some(default) = &self.form.default_choice {
            if !seen.contains(default.as_str()) {
                anyhow::bail!(
                    "default_choice '{}' is not one of: {}",
                    default,
                    self.form.choices.join(", ")
                );
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# TMan Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("Generated default configuration file: {}", path.as_ref().display());
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

    /// Get the per-user log directory
    pub fn get_log_dir() -> Result<PathBuf> {
        dirs::state_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine log directory"))
            .map(|dir| dir.join(APP_NAME).join("log"))
    }
}
