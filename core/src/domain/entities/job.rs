//! Job posting entity and its classification enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::company::Company;
use super::tag::Tag;

/// Where the work happens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Remote,
    Hybrid,
    #[default]
    Onsite,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Remote => "remote",
            JobType::Hybrid => "hybrid",
            JobType::Onsite => "onsite",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" => Ok(JobType::Remote),
            "hybrid" => Ok(JobType::Hybrid),
            "onsite" => Ok(JobType::Onsite),
            _ => Err(format!("Invalid job type: {}", s)),
        }
    }
}

/// Seniority of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Lead,
    Executive,
}

impl JobLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobLevel::Entry => "entry",
            JobLevel::Mid => "mid",
            JobLevel::Senior => "senior",
            JobLevel::Lead => "lead",
            JobLevel::Executive => "executive",
        }
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entry" => Ok(JobLevel::Entry),
            "mid" => Ok(JobLevel::Mid),
            "senior" => Ok(JobLevel::Senior),
            "lead" => Ok(JobLevel::Lead),
            "executive" => Ok(JobLevel::Executive),
            _ => Err(format!("Invalid job level: {}", s)),
        }
    }
}

/// Job posting owned by a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier, assigned by the repository on create
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub job_type: JobType,
    pub job_level: JobLevel,
    /// Informational only, never used for filtering
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub is_active: bool,
    /// Owning company
    pub company_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Creates a new, not yet persisted, active job with default type and level
    pub fn new(company_id: i64, title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title,
            description,
            location: None,
            job_type: JobType::default(),
            job_level: JobLevel::default(),
            salary_min: None,
            salary_max: None,
            is_active: true,
            company_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Input for posting a job
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub job_type: JobType,
    pub job_level: JobLevel,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    /// Raw tag names, normalized by the job service
    pub tag_names: Vec<String>,
}

impl NewJob {
    /// Builds the job entity for the owning company
    pub fn into_job(self, company_id: i64) -> Job {
        let mut job = Job::new(company_id, self.title, self.description);
        job.location = self.location;
        job.job_type = self.job_type;
        job.job_level = self.job_level;
        job.salary_min = self.salary_min;
        job.salary_max = self.salary_max;
        job
    }
}

/// Job with its tags (sorted by name) and owning company loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetails {
    pub job: Job,
    pub tags: Vec<Tag>,
    pub company: Company,
}

impl JobDetails {
    pub fn new(job: Job, mut tags: Vec<Tag>, company: Company) -> Self {
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Self { job, tags, company }
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }
}
