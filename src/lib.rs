pub mod audit;
pub mod config;
pub mod error;
pub mod git;
pub mod shell;

// Re-export commonly used types for convenience
pub use audit::AuditLog;
pub use config::{Config, SessionConfig};
pub use error::{Error, Result};
pub use git::{GitRunner, Operation, Subcommand};
pub use shell::{Shell, ShellError, SystemShell};
