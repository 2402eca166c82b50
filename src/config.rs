//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/backlightctl/backlightctl.toml`, or the
//!    file given with `--config`
//! 3. Environment variables: `BACKLIGHTCTL_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::PercentPolicy;

/// Linux sysfs class directory holding one entry per backlight device.
pub const DEFAULT_BACKLIGHT_DIR: &str = "/sys/class/backlight";

/// Unified configuration for backlightctl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory listing backlight devices (default: /sys/class/backlight)
    pub backlight_dir: PathBuf,
    /// Handling of requested percentages outside 0..=100
    pub percent_policy: PercentPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backlight_dir: PathBuf::from(DEFAULT_BACKLIGHT_DIR),
            percent_policy: PercentPolicy::default(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub backlight_dir: Option<PathBuf>,
    pub percent_policy: Option<PercentPolicy>,
}

/// Get the XDG config directory for backlightctl.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "backlightctl").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("backlightctl.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            backlight_dir: overlay
                .backlight_dir
                .clone()
                .unwrap_or_else(|| self.backlight_dir.clone()),
            percent_policy: overlay.percent_policy.unwrap_or(self.percent_policy),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; must exist when given.
    ///   Without it the global XDG file is used if present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        match config_file {
            Some(path) => {
                current = current.merge_with(&load_raw_settings(path)?);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        debug!("load: global config {}", global_path.display());
                        current = current.merge_with(&load_raw_settings(&global_path)?);
                    }
                }
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply BACKLIGHTCTL_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("BACKLIGHTCTL").prefix_separator("_"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("backlight_dir") {
            settings.backlight_dir = PathBuf::from(val);
        }
        match config.get_string("percent_policy") {
            Ok(val) => {
                settings.percent_policy = val
                    .parse()
                    .map_err(|message| ApplicationError::Config { message })?;
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }
}
