//! Game configuration, loadable from TOML
//!
//! ```toml
//! board_size = 15
//! ai_enabled = true
//! ai_delay_ms = 500
//! ai_seed = 42
//! ```

use std::path::Path;

use tracing::{info, warn};

use crate::board::{validate_size, BOARD_SIZE};
use crate::engine::AiEngine;
use crate::error::ConfigError;

/// Default pause before the computer answers, in milliseconds
pub const DEFAULT_AI_DELAY_MS: u64 = 500;

/// Top-level game configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: usize,
    /// Start with the computer playing White
    pub ai_enabled: bool,
    /// Pause before the computer's move is applied
    pub ai_delay_ms: u64,
    /// Fixed seed for the engine's tie-breaks; random when absent
    pub ai_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: BOARD_SIZE,
            ai_enabled: false,
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
            ai_seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.board_size)?;
        Ok(())
    }

    /// Build the decision engine, seeded when `ai_seed` is set.
    pub fn engine(&self) -> AiEngine {
        match self.ai_seed {
            Some(seed) => AiEngine::with_seed(seed),
            None => AiEngine::new(),
        }
    }
}
