use std::path::PathBuf;

/// Errors from engine construction and read accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board dimensions {rows}x{cols}: at least 4 rows and 4 columns required")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors from attempting a drop. All are recoverable: the board is left
/// untouched and the caller decides what to surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is over; reset to play again")]
    GameOver,
}

/// Errors that can occur when loading engine configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = EngineError::InvalidDimensions { rows: 3, cols: 7 };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 3x7: at least 4 rows and 4 columns required"
        );
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::ColumnFull(4).to_string(),
            "column 4 is full"
        );
        assert_eq!(
            MoveError::ColumnOutOfRange(9).to_string(),
            "column 9 is out of range"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rows must be at least 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: rows must be at least 4"
        );
    }
}
