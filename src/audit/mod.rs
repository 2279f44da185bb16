pub mod logger;

pub use logger::AuditLog;
