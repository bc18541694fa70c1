//! Configuration loading for Compass.
//!
//! Optional TOML file at `~/.compass/config.toml`. Everything has a
//! sensible default, so a missing file is the common case and not an
//! error; a present-but-broken file is surfaced as a typed error the
//! caller can log and ignore.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CompassConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Override the session data directory (default `~/.compass`).
    pub data_dir: Option<String>,
    /// Override where exported reports are written (default: the data
    /// directory).
    pub report_dir: Option<String>,
    /// Use ASCII-only glyphs for gauges, stars and checkboxes.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// Presentation toggles resolved from config, consumed by the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl CompassConfig {
    /// Load the config file if one exists. `Ok(None)` when there is no
    /// file (or no determinable home directory).
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {err}", path);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {err}", path);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
        }
    }

    #[must_use]
    pub fn data_dir_override(&self) -> Option<PathBuf> {
        self.app
            .as_ref()
            .and_then(|a| a.data_dir.as_deref())
            .map(PathBuf::from)
    }

    #[must_use]
    pub fn report_dir_override(&self) -> Option<PathBuf> {
        self.app
            .as_ref()
            .and_then(|a| a.report_dir.as_deref())
            .map(PathBuf::from)
    }
}

/// `~/.compass/config.toml`, when a home directory exists.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".compass").join("config.toml"))
}
