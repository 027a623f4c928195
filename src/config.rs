//! Editor configuration
//!
//! Stored as RON in the platform config directory. A missing or unreadable
//! file is never fatal: the editor falls back to defaults and says so in the log.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::level::MotionSettings;
use crate::motion::{Playfield, DEFAULT_MAX_STEPS};

const APP_DIR: &str = "beltrunner-editor";
const CONFIG_FILE: &str = "config.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("serialization error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("no config directory on this platform")]
    NoConfigDir,
}

/// User-tunable editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Field entities move across, in model units
    pub playfield: Playfield,
    /// Upper bound on steps when projecting a velocity to the field edge
    pub max_projection_steps: u32,
    /// Border drawn around the playfield, in model units
    pub view_margin_x: f64,
    pub view_margin_y: f64,
    /// Speed given to a new motion when none was entered
    pub default_speed: f64,
    /// Directory the open/save dialogs start in
    pub last_directory: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let playfield = Playfield::STANDARD;
        Self {
            playfield,
            max_projection_steps: DEFAULT_MAX_STEPS,
            view_margin_x: playfield.width / 8.0,
            view_margin_y: playfield.height / 8.0,
            default_speed: 10.0,
            last_directory: None,
        }
    }
}

impl EditorConfig {
    /// Settings used when converting file velocities
    pub fn motion_settings(&self) -> MotionSettings {
        MotionSettings {
            playfield: self.playfield,
            max_steps: self.max_projection_steps,
        }
    }

    /// Read a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Self = ron::from_str(&contents)?;
        Ok(config.sanitized())
    }

    /// Write a config file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .indentor("  ".to_string());
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Load from the default location, falling back to defaults
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Save to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Replace values the editor cannot work with by their defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let pf = self.playfield;
        if !(pf.width.is_finite() && pf.height.is_finite() && pf.width > 0.0 && pf.height > 0.0) {
            warn!(width = pf.width, height = pf.height, "invalid playfield in config");
            self.playfield = defaults.playfield;
        }
        if self.max_projection_steps == 0 {
            warn!("max_projection_steps must be positive");
            self.max_projection_steps = defaults.max_projection_steps;
        }
        if !(self.view_margin_x.is_finite() && self.view_margin_x >= 0.0) {
            self.view_margin_x = defaults.view_margin_x;
        }
        if !(self.view_margin_y.is_finite() && self.view_margin_y >= 0.0) {
            self.view_margin_y = defaults.view_margin_y;
        }
        if !(self.default_speed.is_finite() && self.default_speed > 0.0) {
            warn!(speed = self.default_speed, "default_speed must be positive");
            self.default_speed = defaults.default_speed;
        }
        self
    }
}

/// `<config dir>/beltrunner-editor/config.ron`, if the platform has one
#[cfg(not(target_arch = "wasm32"))]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(target_arch = "wasm32")]
pub fn config_path() -> Option<PathBuf> {
    None
}
