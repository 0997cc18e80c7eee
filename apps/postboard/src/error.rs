//! Front-end error type.

use thiserror::Error;

/// Errors raised while reading or running a command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Errors the session reports and moves past; anything else ends it.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Io(_))
    }
}

/// Result type alias for the front end.
pub type AppResult<T> = Result<T, AppError>;
