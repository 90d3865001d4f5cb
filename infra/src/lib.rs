//! # Infrastructure Layer
//!
//! Concrete implementations of the `jb_core` repository traits backed by
//! MySQL through SQLx, plus connection pool management.
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core error types for convenience
pub use jb_core::errors::{DomainError, DomainResult};

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

#[cfg(feature = "mysql")]
pub use database::{
    DatabasePool, MySqlCompanyRepository, MySqlJobRepository, MySqlTagRepository,
    MySqlUserRepository,
};

/// Infrastructure-specific error types, raised while wiring the application
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
