//! Error types for board setup and engine configuration.

use thiserror::Error;

/// Board-level errors. All are local and recoverable.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("unsupported board size {size} (expected 2..={max})", max = crate::board::MAX_SIZE)]
    InvalidSize { size: usize },

    #[error("point {point} is not empty")]
    Occupied { point: u16 },

    #[error("coordinate ({row}, {col}) is off the board")]
    OffBoard { row: usize, col: usize },

    #[error("cannot parse coordinate {0:?}")]
    BadCoordinate(String),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
