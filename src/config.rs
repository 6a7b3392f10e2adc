//! Application configuration.
//!
//! Settings come from an optional JSON file, overridden by command-line
//! flags, with the built-in defaults filling whatever is left.

use crate::consts::cli_consts::{
    DEFAULT_PAGE_SIZE, DEFAULT_ROW_COUNT, carousel::MIN_ROTATION_INTERVAL_MS,
    carousel::ROTATION_INTERVAL_MS,
};
use crate::error::{ConfigError, WidgetError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::{fs, time::Duration};

/// Partial configuration, as read from disk or collected from flags.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Seed for the sample data; random when absent.
    pub seed: Option<u64>,
    /// Number of project rows to generate.
    pub rows: Option<usize>,
    /// Rows per table page.
    pub page_size: Option<usize>,
    /// Time each quote stays on screen, in milliseconds.
    pub quote_interval_ms: Option<u64>,
    /// Whether to paint the dashboard background.
    pub with_background_color: Option<bool>,
}

/// Fully resolved dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    pub seed: Option<u64>,
    pub rows: usize,
    pub page_size: NonZeroUsize,
    pub quote_interval: Duration,
    pub with_background_color: bool,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Layer `overrides` on top of `self`; values set in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            seed: overrides.seed.or(self.seed),
            rows: overrides.rows.or(self.rows),
            page_size: overrides.page_size.or(self.page_size),
            quote_interval_ms: overrides.quote_interval_ms.or(self.quote_interval_ms),
            with_background_color: overrides
                .with_background_color
                .or(self.with_background_color),
        }
    }

    /// Fill in defaults and validate.
    ///
    /// # Errors
    /// Returns [`ConfigError::Widget`] for a zero page size and
    /// [`ConfigError::Invalid`] for a quote interval below the floor.
    pub fn resolve(&self) -> Result<DashboardSettings, ConfigError> {
        let page_size = NonZeroUsize::new(self.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
            .ok_or(WidgetError::ZeroPageSize)?;

        let interval_ms = self.quote_interval_ms.unwrap_or(ROTATION_INTERVAL_MS);
        if interval_ms < MIN_ROTATION_INTERVAL_MS {
            return Err(ConfigError::Invalid(format!(
                "quote interval must be at least {}ms, got {}ms",
                MIN_ROTATION_INTERVAL_MS, interval_ms
            )));
        }

        Ok(DashboardSettings {
            seed: self.seed,
            rows: self.rows.unwrap_or(DEFAULT_ROW_COUNT),
            page_size,
            quote_interval: Duration::from_millis(interval_ms),
            with_background_color: self.with_background_color.unwrap_or(false),
        })
    }
}

/// Default config file location: `~/.producthq/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home_path = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home_path.join(".producthq").join("config.json"))
}

/// Load the configuration file.
///
/// An explicitly given path must exist. The default path is optional: if
/// there is no file there, an empty configuration is returned.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => Config::load_from_file(path),
        None => {
            let path = get_config_path()?;
            if path.exists() {
                Config::load_from_file(&path)
            } else {
                Ok(Config::default())
            }
        }
    }
}
