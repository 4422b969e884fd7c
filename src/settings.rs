//! Runtime settings
//!
//! Read from an optional JSON file at startup. Any field left out keeps its
//! default, and the embedded `tuning` block is validated before use.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::FPS;
use crate::error::ConfigError;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the high score is persisted
    pub high_score_file: PathBuf,
    /// Fixed seed for the first round (random when absent)
    pub seed: Option<u64>,
    /// Frames per second the headless runner simulates at
    pub frame_rate: u32,
    /// Rounds the headless autopilot plays before exiting
    pub demo_rounds: u32,
    /// Cap on simulated seconds per demo round
    pub max_round_seconds: f32,
    /// Geometry and difficulty
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_score_file: PathBuf::from("highscore.txt"),
            seed: None,
            frame_rate: FPS,
            demo_rounds: 3,
            max_round_seconds: 120.0,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "lane_dodger.json";

    /// Load settings from `path`
    ///
    /// A missing file means defaults. A file that exists but can't be read,
    /// parsed or validated is a startup error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = Self::from_json(&json).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be at least 1".into()));
        }
        if !(self.max_round_seconds > 0.0) {
            return Err(ConfigError::Invalid(
                "max_round_seconds must be positive".into(),
            ));
        }
        self.tuning.validate()
    }

    /// Seconds per simulated frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }
}
