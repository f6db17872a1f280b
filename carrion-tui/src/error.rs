//! Application error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Ui(#[from] termnav::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unknown key name in key bindings: {0:?}")]
    UnknownKey(String),
    #[error("unknown command name in key bindings: {0:?}")]
    UnknownCommand(String),
    #[error("invalid log level: {0:?}")]
    InvalidLogLevel(String),
    /// Reported by the map library. Shown in the log region, never fatal.
    #[error("ERROR: {0}")]
    Collaborator(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
