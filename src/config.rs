// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::color_utils::{DEFAULT_EVENT_COLORS, normalize_hex};
use crate::context::AppContext;
use crate::parser::ParserOptions;
use crate::storage::LocalStorage;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;

fn default_duration_mins() -> u32 {
    60
}

fn default_event_colors() -> Vec<String> {
    DEFAULT_EVENT_COLORS.iter().map(|c| c.to_string()).collect()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Length of events whose request names no end time.
    #[serde(default = "default_duration_mins")]
    pub default_duration_mins: u32,

    /// Accent colors handed out to newly created events, "#RRGGBB".
    #[serde(default = "default_event_colors")]
    pub event_colors: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_mins: default_duration_mins(),
            event_colors: default_event_colors(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults.
    /// Any other failure (unreadable or malformed file) is still an error.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::debug!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Whether an error from `load` means the config file does not exist.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LocalStorage::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LocalStorage::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    /// Get the path string using an explicit context.
    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }

    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions::with_default_duration_mins(self.default_duration_mins)
    }

    /// Configured colors in canonical form. Entries that are not valid hex
    /// colors are skipped; an empty result falls back to the default palette.
    pub fn palette(&self) -> Vec<String> {
        let colors: Vec<String> = self
            .event_colors
            .iter()
            .filter_map(|c| {
                let normalized = normalize_hex(c);
                if normalized.is_none() {
                    log::warn!("Ignoring invalid event color '{}'", c);
                }
                normalized
            })
            .collect();

        if colors.is_empty() {
            default_event_colors()
        } else {
            colors
        }
    }
}
