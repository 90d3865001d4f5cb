//! Job repository trait defining job persistence and search.

use async_trait::async_trait;
use std::collections::HashMap;

use jb_shared::Pagination;

use crate::domain::entities::job::{Job, JobDetails};
use crate::domain::value_objects::JobFilter;
use crate::errors::DomainError;

/// Repository trait for Job persistence operations
///
/// Every method returning [`JobDetails`] loads each job's tags sorted by
/// name and its owning company.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a job together with its tag associations, atomically
    ///
    /// # Arguments
    /// * `job` - The job to insert; its `id` is ignored
    /// * `tag_ids` - IDs of existing tags, without duplicates
    ///
    /// # Returns
    /// * `Ok(Job)` - The stored job with its assigned ID
    /// * `Err(DomainError)` - Storage error; nothing was written
    async fn create(&self, job: Job, tag_ids: &[i64]) -> Result<Job, DomainError>;

    /// Find a job by ID with tags and company loaded
    async fn find_by_id(&self, id: i64) -> Result<Option<JobDetails>, DomainError>;

    /// Write every mutable column of an existing job
    ///
    /// When `tag_ids` is `Some`, the job's tag associations are replaced by
    /// exactly those tags (an empty slice clears them) in the same
    /// transaction.
    async fn update(&self, job: Job, tag_ids: Option<&[i64]>) -> Result<Job, DomainError>;

    /// Delete a job and its tag associations
    ///
    /// # Returns
    /// * `Ok(true)` - Job deleted
    /// * `Ok(false)` - No job with the given ID
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;

    /// Jobs matching the filter, newest first (ties broken by ID,
    /// descending), restricted to the filter's pagination window
    async fn search(&self, filter: &JobFilter) -> Result<Vec<JobDetails>, DomainError>;

    /// A company's jobs regardless of `is_active`, newest first
    async fn find_by_company(
        &self,
        company_id: i64,
        page: Pagination,
    ) -> Result<Vec<JobDetails>, DomainError>;

    /// Jobs of several companies, grouped by company ID, in ID order.
    /// Companies without jobs have no entry.
    async fn find_by_company_ids(
        &self,
        company_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Job>>, DomainError>;
}
