//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure holding locale and
//! palette overrides plus CLI defaults, with load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/txlens/config.json`
//! - macOS: `~/Library/Application Support/txlens/config.json`
//! - Windows: `%APPDATA%/txlens/config.json`
//!
//! # Example
//!
//! ```ignore
//! use txlens::config::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.strings.insert(StrKey::Unconfirmed, "Waiting".into());
//! config.save().expect("Failed to save config");
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::constants::{APP_NAME, CONFIG_FILE};
use crate::locale::{Locale, StrKey};
use crate::row::RowLayout;
use crate::theme::{ColorRole, Palette};

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// # Fields
///
/// * `strings` - Per-key replacements for the English string table
/// * `palette` - Per-role color overrides (`"red"`, `"#ff8800"`, ...)
/// * `layout` - Row layout the CLI uses when none is given
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub strings: HashMap<StrKey, String>,
    pub palette: HashMap<ColorRole, String>,
    pub layout: RowLayout,
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the configuration from disk.
    ///
    /// If the configuration file doesn't exist or cannot be parsed,
    /// returns the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path().and_then(|path| Self::try_load_from(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the JSON content
    /// cannot be parsed.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or writing fails.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration as pretty JSON to a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Builds the locale described by this configuration.
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::with_overrides(self.strings.clone())
    }

    /// Builds the palette described by this configuration.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::from_overrides(&self.palette)
    }
}

// ============================================================================
// Tests
// ============================================================================
