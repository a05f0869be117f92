//! Session configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Personality ELARA starts with.
const DEFAULT_PERSONALITY: u8 = 10;

/// How repeat reads count toward phase thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadCounting {
    /// Only the first read of each document counts.
    #[default]
    FirstRead,
    /// Every successful read counts, including rereads.
    EveryRead,
}

/// Errors loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The file is not valid configuration JSON.
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

/// Configuration for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name shown by `whoami` once ELARA stops mistaking the player for herself.
    pub player_name: String,
    /// RNG seed for directory listing sizes.
    pub seed: u64,
    /// Read counting rule.
    pub read_counting: ReadCounting,
    /// Starting personality level (0-100).
    pub initial_personality: u8,
    /// Root folder for audio assets.
    pub audio_root: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_name: "UNKNOWN".to_string(),
            seed: 1984,
            read_counting: ReadCounting::default(),
            initial_personality: DEFAULT_PERSONALITY,
            audio_root: PathBuf::from("audio"),
        }
    }
}

impl SessionConfig {
    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        // File values go through the same normalization as the builder.
        let name = loaded.player_name.clone();
        let personality = loaded.initial_personality;
        Ok(Self {
            player_name: Self::default().player_name,
            ..loaded
        }
        .with_player_name(name)
        .with_initial_personality(personality))
    }

    /// Set the player name. Blank names are ignored; names are upper-cased.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = name.trim();
        if !name.is_empty() {
            self.player_name = name.to_uppercase();
        }
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the read counting rule.
    pub fn with_read_counting(mut self, counting: ReadCounting) -> Self {
        self.read_counting = counting;
        self
    }

    /// Set the starting personality (clamped to 0-100).
    pub fn with_initial_personality(mut self, level: u8) -> Self {
        self.initial_personality = level.min(100);
        self
    }

    /// Set the audio asset root.
    pub fn with_audio_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.audio_root = root.into();
        self
    }
}
