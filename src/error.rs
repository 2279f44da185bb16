use std::io;
use thiserror::Error;

// Import module-level errors for Error
use crate::config::settings::ConfigError;
use crate::shell::ShellError;

/// Top-level error that wraps all module-specific errors
///
/// Execution surfaces `ShellError` directly; this type is for session-level
/// code that also loads configuration or creates audit logs. All module
/// errors automatically convert via the `From` trait.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Shell error: {0}")]
    Shell(#[from] ShellError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for session-level operations
pub type Result<T> = std::result::Result<T, Error>;
