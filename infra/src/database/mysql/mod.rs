//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod company_repository_impl;
pub mod job_repository_impl;
pub mod tag_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use company_repository_impl::MySqlCompanyRepository;
pub use job_repository_impl::MySqlJobRepository;
pub use tag_repository_impl::MySqlTagRepository;
pub use user_repository_impl::MySqlUserRepository;

use jb_core::errors::DomainError;

/// Whether the error is a duplicate-key violation (MySQL error 1062)
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}

/// Log a failed statement and hide the driver detail behind an internal error
pub(crate) fn storage_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(error = %e, context, "Database operation failed");
        DomainError::internal(context)
    }
}

/// Map a row decoding failure for the named column
pub(crate) fn column_error(column: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("Failed to get {}: {}", column, e),
    }
}
