//! Job service implementation

use std::sync::Arc;

use jb_shared::Pagination;

use crate::domain::entities::{Company, JobDetails, NewJob};
use crate::domain::value_objects::{JobFilter, JobPatch};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::JobRepository;
use crate::services::tag::TagService;

pub struct JobService {
    jobs: Arc<dyn JobRepository>,
    tags: Arc<TagService>,
}

impl JobService {
    pub fn new(jobs: Arc<dyn JobRepository>, tags: Arc<TagService>) -> Self {
        Self { jobs, tags }
    }

    /// Post a new job for the company
    ///
    /// Tag names are normalized and missing tags created before the job
    /// and its associations are written.
    pub async fn create(&self, company: &Company, new_job: NewJob) -> DomainResult<JobDetails> {
        check_salary("salary_min", new_job.salary_min)?;
        check_salary("salary_max", new_job.salary_max)?;

        let tags = self.tags.get_or_create_many(new_job.tag_names.as_slice()).await?;
        let tag_ids: Vec<i64> = tags.iter().map(|t| t.id).collect();

        let job = self.jobs.create(new_job.into_job(company.id), &tag_ids).await?;
        tracing::info!(job_id = job.id, company_id = company.id, "Job created");

        Ok(JobDetails::new(job, tags, company.clone()))
    }

    pub async fn get(&self, id: i64) -> DomainResult<JobDetails> {
        self.jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Job"))
    }

    /// Apply a partial update to a job the company owns
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No such job
    /// * `Err(DomainError::Forbidden)` - Job belongs to another company
    pub async fn update(
        &self,
        company: &Company,
        id: i64,
        patch: &JobPatch,
    ) -> DomainResult<JobDetails> {
        let JobDetails { mut job, .. } = self.get(id).await?;
        if !company.owns(&job) {
            tracing::warn!(job_id = id, company_id = company.id, "Rejected update of foreign job");
            return Err(DomainError::Forbidden {
                message: "Not authorized to update this job".to_string(),
            });
        }

        if let Some(salary_min) = patch.salary_min {
            check_salary("salary_min", salary_min)?;
        }
        if let Some(salary_max) = patch.salary_max {
            check_salary("salary_max", salary_max)?;
        }

        let tag_ids = match &patch.tag_names {
            Some(names) => {
                let tags = self.tags.get_or_create_many(names.as_slice()).await?;
                Some(tags.iter().map(|t| t.id).collect::<Vec<i64>>())
            }
            None => None,
        };

        patch.apply_to(&mut job);
        self.jobs.update(job, tag_ids.as_deref()).await?;
        tracing::debug!(job_id = id, "Job updated");

        self.get(id).await
    }

    /// Delete a job the company owns
    pub async fn delete(&self, company: &Company, id: i64) -> DomainResult<()> {
        let details = self.get(id).await?;
        if !company.owns(&details.job) {
            tracing::warn!(job_id = id, company_id = company.id, "Rejected delete of foreign job");
            return Err(DomainError::Forbidden {
                message: "Not authorized to delete this job".to_string(),
            });
        }

        if !self.jobs.delete(id).await? {
            return Err(DomainError::not_found("Job"));
        }
        tracing::info!(job_id = id, company_id = company.id, "Job deleted");
        Ok(())
    }

    pub async fn search(&self, filter: &JobFilter) -> DomainResult<Vec<JobDetails>> {
        check_salary("salary_min", filter.salary_min)?;
        check_salary("salary_max", filter.salary_max)?;
        self.jobs.search(filter).await
    }

    /// The company's own jobs, active or not, newest first
    pub async fn company_jobs(
        &self,
        company_id: i64,
        page: Pagination,
    ) -> DomainResult<Vec<JobDetails>> {
        self.jobs.find_by_company(company_id, page).await
    }
}

fn check_salary(field: &str, value: Option<i32>) -> DomainResult<()> {
    match value {
        Some(v) if v < 0 => Err(ValidationError::BelowMinimum {
            field: field.to_string(),
            min: 0,
        }
        .into()),
        _ => Ok(()),
    }
}
