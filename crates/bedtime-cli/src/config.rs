//! Configuration file support for bedtime.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/bedtime/config.toml` (lowest priority)
//! - Project-local: `.bedtime.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use bedtime_core::{parse_clock, CoffeeIntake, SleepAmount};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default input values.
    pub inputs: InputsConfig,
    /// Model settings.
    pub model: ModelConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// Default input values, used when the matching CLI flag is absent.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    /// Wake-up time (`HH:MM`, 24-hour).
    pub wake: Option<String>,
    /// Desired sleep in hours (4.0-12.0, steps of 0.25).
    pub sleep: Option<f64>,
    /// Daily coffee intake in cups (1-20).
    pub coffee: Option<u32>,
}

/// Model configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to a safetensors sleep model artifact.
    pub path: Option<PathBuf>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text" or "json".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/bedtime/config.toml`
    /// 2. Project-local: `.bedtime.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as
    /// warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load XDG config (lowest priority)
        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        // Load project-local config (higher priority, merged)
        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        // Validate merged config
        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        if let Some(ref wake) = self.inputs.wake {
            if parse_clock(wake).is_err() {
                return Err(format!("inputs.wake must be HH:MM, got '{wake}'"));
            }
        }
        if let Some(sleep) = self.inputs.sleep {
            if SleepAmount::new(sleep).is_err() {
                return Err(format!(
                    "inputs.sleep must be 4.0-12.0 in steps of 0.25, got {sleep}"
                ));
            }
        }
        if let Some(coffee) = self.inputs.coffee {
            if CoffeeIntake::new(coffee).is_err() {
                return Err(format!("inputs.coffee must be 1-20, got {coffee}"));
            }
        }

        if let Some(ref f) = self.output.format {
            if f != "text" && f != "json" {
                return Err(format!("output.format must be 'text' or 'json', got '{f}'"));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.inputs.wake = other.inputs.wake.or_else(|| self.inputs.wake.take());
        self.inputs.sleep = other.inputs.sleep.or(self.inputs.sleep);
        self.inputs.coffee = other.inputs.coffee.or(self.inputs.coffee);

        self.model.path = other.model.path.or_else(|| self.model.path.take());

        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bedtime").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.bedtime.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".bedtime.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
