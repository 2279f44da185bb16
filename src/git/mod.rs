pub mod operation;
pub mod runner;
pub mod subcommand;

// Re-export commonly used types
pub use operation::Operation;
pub use runner::GitRunner;
pub use subcommand::Subcommand;
