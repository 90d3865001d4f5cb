//! Job posting bodies and search parameters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use jb_core::domain::entities::{Job, JobDetails, JobLevel, JobType, NewJob};
use jb_core::domain::value_objects::{JobFilter, JobPatch};
use jb_shared::Pagination;

use super::company::CompanyProfile;
use super::{default_limit, nullable, TagResponse};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: JobType,
    #[serde(default)]
    pub job_level: JobLevel,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub salary_min: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub salary_max: Option<i32>,
    #[serde(default)]
    pub tag_names: Vec<String>,
}

impl From<CreateJobRequest> for NewJob {
    fn from(request: CreateJobRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            location: request.location,
            job_type: request.job_type,
            job_level: request.job_level,
            salary_min: request.salary_min,
            salary_max: request.salary_max,
            tag_names: request.tag_names,
        }
    }
}

/// Partial job update
///
/// `null` clears `location` and the salaries; for the other fields it is
/// treated like an absent field. A present `tag_names` replaces all tags.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateJobRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
    #[serde(default)]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub job_level: Option<JobLevel>,
    #[serde(default, deserialize_with = "nullable")]
    pub salary_min: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub salary_max: Option<Option<i32>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub tag_names: Option<Vec<String>>,
}

impl From<UpdateJobRequest> for JobPatch {
    fn from(request: UpdateJobRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            location: request.location,
            job_type: request.job_type,
            job_level: request.job_level,
            salary_min: request.salary_min,
            salary_max: request.salary_max,
            is_active: request.is_active,
            tag_names: request.tag_names,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Query string of `GET /jobs/`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JobQuery {
    /// Comma separated tag names
    pub tags: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub job_level: Option<JobLevel>,
    #[validate(range(min = 0))]
    pub salary_min: Option<i32>,
    #[validate(range(min = 0))]
    pub salary_max: Option<i32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u32,
}

impl From<JobQuery> for JobFilter {
    fn from(query: JobQuery) -> Self {
        Self {
            tags: query.tags,
            location: query.location,
            job_type: query.job_type,
            job_level: query.job_level,
            salary_min: query.salary_min,
            salary_max: query.salary_max,
            is_active: query.is_active,
            page: Pagination::new(query.skip, query.limit),
        }
    }
}

/// Query string of `GET /jobs/company/my-jobs`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MyJobsQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u32,
}

impl MyJobsQuery {
    pub fn page(&self) -> Pagination {
        Pagination::new(self.skip, self.limit)
    }
}

/// Short form of a job, listed under its company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: i64,
    pub title: String,
    pub location: Option<String>,
    pub job_type: JobType,
    pub job_level: JobLevel,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobSummary {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            location: job.location,
            job_type: job.job_type,
            job_level: job.job_level,
            is_active: job.is_active,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub job_type: JobType,
    pub job_level: JobLevel,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub is_active: bool,
    pub company_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<TagResponse>,
    pub company: CompanyProfile,
}

impl From<JobDetails> for JobResponse {
    fn from(details: JobDetails) -> Self {
        let JobDetails { job, tags, company } = details;
        Self {
            id: job.id,
            title: job.title,
            description: job.description,
            location: job.location,
            job_type: job.job_type,
            job_level: job.job_level,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            is_active: job.is_active,
            company_id: job.company_id,
            created_at: job.created_at,
            updated_at: job.updated_at,
            tags: tags.into_iter().map(TagResponse::from).collect(),
            company: company.into(),
        }
    }
}
