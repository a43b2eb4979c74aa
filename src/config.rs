//! Configuration file support for the gallery.
//!
//! Settings are stored as versioned JSON so older builds refuse files written
//! by newer ones instead of silently dropping fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Log level setting for the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    /// Widget state transitions
    Debug,
    /// Paint paths and per-gesture routing
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Gallery configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Width of the list-like widgets (listbox, combobox, grid, treeview)
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,

    /// Height of the list-like widgets
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,

    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Row height for listbox and combobox rows
    #[serde(default = "default_row_height")]
    pub row_height: f32,

    /// Directory PNG snapshots are written to
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_viewport_width() -> f32 {
    300.0
}

fn default_viewport_height() -> f32 {
    200.0
}

fn default_font_size() -> f32 {
    ccl_canvas::DEFAULT_FONT_SIZE
}

fn default_row_height() -> f32 {
    ccl_ui::constants::ROW_HEIGHT
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("snapshots")
}

impl GalleryConfig {
    pub fn new() -> Self {
        Self {
            version: default_version(),
            log_level: LogLevel::default(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            font_size: default_font_size(),
            row_height: default_row_height(),
            snapshot_dir: default_snapshot_dir(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    pub fn default_filename() -> &'static str {
        "config.json"
    }

    /// Default config file path, under the XDG config directory when there
    /// is one.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("ccl").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| home_dir.join(".config").join("ccl").join(Self::default_filename()))
        }
    }

    /// Load configuration from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load configuration from `path`, falling back to defaults when there is
    /// no path, no file, or the file is unusable.
    ///
    /// Nothing is logged here: the result decides the log level, so the
    /// caller reports the [`ConfigSource`] once the logger is up.
    pub fn load_or_default(path: Option<PathBuf>) -> (Self, ConfigSource) {
        let Some(path) = path else {
            return (Self::default(), ConfigSource::Defaults(None));
        };
        if !path.exists() {
            return (Self::default(), ConfigSource::Defaults(Some(path)));
        }

        match Self::load(&path) {
            Ok(config) => (config, ConfigSource::Loaded(path)),
            Err(e) => (Self::default(), ConfigSource::Invalid(path, e)),
        }
    }

    /// [`GalleryConfig::load_or_default`] at the default path.
    pub fn load_from_default_path() -> (Self, ConfigSource) {
        Self::load_or_default(Self::default_path())
    }

    /// Write configuration to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(path)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the configuration in use came from.
#[derive(Debug)]
pub enum ConfigSource {
    Loaded(PathBuf),
    /// No config file at the path, or no config directory at all
    Defaults(Option<PathBuf>),
    /// The file exists but could not be used; defaults are in effect
    Invalid(PathBuf, ConfigError),
}

impl ConfigSource {
    pub fn is_invalid(&self) -> bool {
        matches!(self, ConfigSource::Invalid(..))
    }

    pub fn log(&self) {
        match self {
            ConfigSource::Loaded(path) => log::info!("Loaded configuration from {:?}", path),
            ConfigSource::Defaults(Some(path)) => log::debug!("No config file found at {:?}", path),
            ConfigSource::Defaults(None) => log::debug!("No config directory, using defaults"),
            ConfigSource::Invalid(path, e) => log::warn!("Failed to load config file {:?}: {}", path, e),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error("Configuration file version {file_version} is newer than supported version {supported_version}")]
    VersionTooNew { file_version: u32, supported_version: u32 },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
