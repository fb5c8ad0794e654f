//! User configuration.
//!
//! An optional `config.toml` lives in the platform config directory
//! (`~/.config/images-upload-cli/` on Linux). Stock defaults are the base
//! layer; the user file only needs the keys it overrides.
//!
//! ```toml
//! [thumbnail]
//! width = 300               # Bounding box for the scaled image
//! height = 300
//! quality = 95              # JPEG quality (1-100)
//! caption_size = 14.0       # Caption glyph height in pixels
//! caption_font = "DejaVuSans.ttf"   # Optional; CAPTION_FONT env var wins
//!
//! [notify]
//! program = "kdialog"       # Looked up on PATH
//! args = ["--passivepopup"] # Placed before the message
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the directory under the platform config dir.
pub const APP_DIR_NAME: &str = "images-upload-cli";

/// Environment variable that overrides `thumbnail.caption_font`.
pub const CAPTION_FONT_VAR: &str = "CAPTION_FONT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Please set the environment variable {key}")]
    MissingEnv { key: String },
    #[error("Caption font not found: {name}")]
    FontNotFound { name: String },
    #[error("Invalid caption font {path}: {reason}")]
    InvalidFont { path: PathBuf, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Thumbnail geometry, encoding and caption font.
    pub thumbnail: ThumbnailConfig,
    /// Desktop notification helper.
    pub notify: NotifyConfig,
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thumb = &self.thumbnail;
        if thumb.width == 0 || thumb.height == 0 {
            return Err(ConfigError::Validation(
                "thumbnail.width and thumbnail.height must be non-zero".into(),
            ));
        }
        if !(1..=100).contains(&thumb.quality) {
            return Err(ConfigError::Validation(
                "thumbnail.quality must be 1-100".into(),
            ));
        }
        if !(thumb.caption_size.is_finite() && thumb.caption_size > 0.0) {
            return Err(ConfigError::Validation(
                "thumbnail.caption_size must be a positive number".into(),
            ));
        }
        if self.notify.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "notify.program must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Apply the `CAPTION_FONT` override, if set.
    pub fn with_caption_font_override(mut self, font: Option<String>) -> Self {
        if let Some(font) = font {
            self.thumbnail.caption_font = Some(font);
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailConfig {
    pub width: u32,
    pub height: u32,
    pub quality: u32,
    pub caption_size: f32,
    /// File name or path of the caption font. `None` tries the stock fonts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_font: Option<String>,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            quality: 95,
            caption_size: 14.0,
            caption_font: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotifyConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            program: "kdialog".to_string(),
            args: vec!["--passivepopup".to_string()],
        }
    }
}

// =============================================================================
// Loading and merging
// =============================================================================

/// Platform config directory for this tool, if the platform has one.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(AppConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `config.toml` from `dir` as a raw TOML value.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge user values on top of stock defaults, deserialize, validate.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let merged = match load_raw_config(dir)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: AppConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// A commented stock `config.toml`, printed by `imgup gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# images-upload-cli configuration
# ===============================
# All settings are optional. Values shown are the defaults.
# Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Captioned thumbnails
# ---------------------------------------------------------------------------
[thumbnail]
# Bounding box the image is scaled down into (aspect ratio is preserved).
# A 16px caption strip is added below the scaled image.
width = 300
height = 300

# JPEG quality of the thumbnail (1-100).
quality = 95

# Caption glyph height in pixels.
caption_size = 14.0

# Caption font: a path, or a file name searched in the system font
# directories. The CAPTION_FONT environment variable takes precedence.
# When unset, arial.ttf, DejaVuSans.ttf, LiberationSans-Regular.ttf and
# FreeSans.ttf are tried in that order.
# caption_font = "DejaVuSans.ttf"

# ---------------------------------------------------------------------------
# Desktop notifications (--notify)
# ---------------------------------------------------------------------------
[notify]
# Helper program, looked up on PATH. Nothing happens if it is missing.
program = "kdialog"

# Arguments placed before the message text.
args = ["--passivepopup"]
"##
}
