//! Tag repository trait.

use async_trait::async_trait;

use crate::domain::entities::tag::Tag;
use crate::errors::DomainError;

/// Repository trait for Tag persistence operations
///
/// Names handed to the repository are already normalized; lookups are exact.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Find a tag by its normalized name
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, DomainError>;

    /// Insert a new tag
    ///
    /// # Returns
    /// * `Ok(Tag)` - The stored tag with its assigned ID
    /// * `Err(DomainError::Conflict)` - A tag with this name already exists,
    ///   typically created concurrently by another request
    /// * `Err(DomainError)` - Storage error
    async fn create(&self, tag: Tag) -> Result<Tag, DomainError>;

    /// All tags ordered by name
    async fn list_all(&self) -> Result<Vec<Tag>, DomainError>;
}
