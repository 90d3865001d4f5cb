//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and keeps the domain layer free of any storage
//! details; MySQL and in-memory implementations live behind it.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given ID
    /// * `Err(DomainError)` - Storage error
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Find a user by login email (exact match)
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with the email
    /// * `Err(DomainError)` - Storage error
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// The `id` of the passed entity is ignored; the returned user carries
    /// the identifier assigned by storage.
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Conflict)` - The email is already registered
    /// * `Err(DomainError)` - Storage error
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Write every mutable column of an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - No user with the entity's ID
    /// * `Err(DomainError)` - Storage error
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
