use std::path::Path;

use tracing::warn;

use crate::error::{ConfigError, EngineError};
use crate::game::{GameState, COLS, ROWS};

/// Engine configuration, loadable from TOML. Only the board dimensions are
/// configurable; defaults are the standard 6x7 grid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
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
        if self.rows < 4 {
            return Err(ConfigError::Validation("rows must be at least 4".into()));
        }
        if self.cols < 4 {
            return Err(ConfigError::Validation("cols must be at least 4".into()));
        }
        Ok(())
    }

    /// Build a fresh game with these dimensions.
    pub fn build(&self) -> Result<GameState, EngineError> {
        GameState::new(self.rows, self.cols)
    }
}
