//! Company repository trait.

use async_trait::async_trait;

use crate::domain::entities::company::Company;
use crate::errors::DomainError;

/// Repository trait for Company entity persistence operations
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Company>, DomainError>;

    /// Fetch several companies at once, keyed by ID. Unknown IDs are skipped.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Company>, DomainError>;

    /// All companies in ID order
    async fn list_all(&self) -> Result<Vec<Company>, DomainError>;

    /// Persist a new company; fails with `DomainError::Conflict` when the
    /// email is already registered
    async fn create(&self, company: Company) -> Result<Company, DomainError>;

    /// Write every mutable column of an existing company
    async fn update(&self, company: Company) -> Result<Company, DomainError>;
}
