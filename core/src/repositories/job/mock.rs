//! In-memory implementation of JobRepository for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use jb_shared::Pagination;

use crate::domain::entities::job::{Job, JobDetails};
use crate::domain::value_objects::JobFilter;
use crate::errors::DomainError;
use crate::repositories::company::{CompanyRepository, MockCompanyRepository};
use crate::repositories::tag::MockTagRepository;

use super::trait_::JobRepository;

/// Mock job repository for testing
///
/// Shares the company and tag mocks so that details can be assembled the
/// same way the SQL implementation joins them.
pub struct MockJobRepository {
    jobs: Arc<RwLock<HashMap<i64, Job>>>,
    job_tags: Arc<RwLock<HashMap<i64, Vec<i64>>>>,
    companies: Arc<MockCompanyRepository>,
    tags: Arc<MockTagRepository>,
    next_id: AtomicI64,
}

impl MockJobRepository {
    pub fn new(companies: Arc<MockCompanyRepository>, tags: Arc<MockTagRepository>) -> Self {
        Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
            job_tags: Arc::new(RwLock::new(HashMap::new())),
            companies,
            tags,
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn count(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Rejects repeated tag IDs like the job_tags primary key does
    fn check_tag_ids(tag_ids: &[i64]) -> Result<(), DomainError> {
        let mut seen = std::collections::HashSet::with_capacity(tag_ids.len());
        if tag_ids.iter().all(|id| seen.insert(*id)) {
            Ok(())
        } else {
            Err(DomainError::internal("duplicate entry on job_tags primary key"))
        }
    }

    /// Newest first, ties broken by ID descending
    fn sort_newest_first(jobs: &mut [Job]) {
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    }

    async fn tag_ids_of(&self, job_id: i64) -> Vec<i64> {
        let job_tags = self.job_tags.read().await;
        job_tags.get(&job_id).cloned().unwrap_or_default()
    }

    async fn load_details(&self, jobs: Vec<Job>) -> Result<Vec<JobDetails>, DomainError> {
        let mut details = Vec::with_capacity(jobs.len());
        for job in jobs {
            let tag_ids = self.tag_ids_of(job.id).await;
            let tags = self.tags.find_by_ids(&tag_ids).await;
            let company = self
                .companies
                .find_by_id(job.company_id)
                .await?
                .ok_or_else(|| DomainError::internal("job references a missing company"))?;
            details.push(JobDetails::new(job, tags, company));
        }
        Ok(details)
    }
}

#[async_trait]
impl JobRepository for MockJobRepository {
    async fn create(&self, mut job: Job, tag_ids: &[i64]) -> Result<Job, DomainError> {
        if self.companies.find_by_id(job.company_id).await?.is_none() {
            return Err(DomainError::internal("foreign key violation on jobs.company_id"));
        }
        Self::check_tag_ids(tag_ids)?;

        job.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.jobs.write().await.insert(job.id, job.clone());
        self.job_tags.write().await.insert(job.id, tag_ids.to_vec());
        Ok(job)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<JobDetails>, DomainError> {
        let job = self.jobs.read().await.get(&id).cloned();
        match job {
            Some(job) => Ok(self.load_details(vec![job]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn update(&self, job: Job, tag_ids: Option<&[i64]>) -> Result<Job, DomainError> {
        if let Some(tag_ids) = tag_ids {
            Self::check_tag_ids(tag_ids)?;
        }

        let mut jobs = self.jobs.write().await;
        if !jobs.contains_key(&job.id) {
            return Err(DomainError::not_found("Job"));
        }
        jobs.insert(job.id, job.clone());
        drop(jobs);

        if let Some(tag_ids) = tag_ids {
            self.job_tags.write().await.insert(job.id, tag_ids.to_vec());
        }
        Ok(job)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let removed = self.jobs.write().await.remove(&id).is_some();
        self.job_tags.write().await.remove(&id);
        Ok(removed)
    }

    async fn search(&self, filter: &JobFilter) -> Result<Vec<JobDetails>, DomainError> {
        let all: Vec<Job> = self.jobs.read().await.values().cloned().collect();

        let mut matching = Vec::new();
        for job in all {
            let tags = self.tags.find_by_ids(&self.tag_ids_of(job.id).await).await;
            let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
            if filter.matches(&job, &names) {
                matching.push(job);
            }
        }

        Self::sort_newest_first(&mut matching);
        self.load_details(filter.page.apply(matching)).await
    }

    async fn find_by_company(
        &self,
        company_id: i64,
        page: Pagination,
    ) -> Result<Vec<JobDetails>, DomainError> {
        let mut owned: Vec<Job> = self
            .jobs
            .read()
            .await
            .values()
            .filter(|j| j.company_id == company_id)
            .cloned()
            .collect();

        Self::sort_newest_first(&mut owned);
        self.load_details(page.apply(owned)).await
    }

    async fn find_by_company_ids(
        &self,
        company_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Job>>, DomainError> {
        let jobs = self.jobs.read().await;
        let mut grouped: HashMap<i64, Vec<Job>> = HashMap::new();
        for job in jobs.values().filter(|j| company_ids.contains(&j.company_id)) {
            grouped.entry(job.company_id).or_default().push(job.clone());
        }
        for list in grouped.values_mut() {
            list.sort_by_key(|j| j.id);
        }
        Ok(grouped)
    }
}
