//! Partial updates for accounts and jobs.
//!
//! A `None` field is left untouched. Nullable columns use `Option<Option<T>>`
//! so that `Some(None)` clears the value.

use crate::domain::entities::{Company, Job, JobLevel, JobType, User};

/// Changes a user may make to their own profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub full_name: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
    }

    pub fn apply_to(&self, user: &mut User) {
        if let Some(full_name) = &self.full_name {
            user.full_name = full_name.clone();
        }
        user.touch();
    }
}

/// Changes a company may make to its own profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub company_name: Option<String>,
    pub description: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub location: Option<Option<String>>,
}

impl CompanyPatch {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.description.is_none()
            && self.website.is_none()
            && self.location.is_none()
    }

    pub fn apply_to(&self, company: &mut Company) {
        if let Some(company_name) = &self.company_name {
            company.company_name = company_name.clone();
        }
        if let Some(description) = &self.description {
            company.description = description.clone();
        }
        if let Some(website) = &self.website {
            company.website = website.clone();
        }
        if let Some(location) = &self.location {
            company.location = location.clone();
        }
        company.touch();
    }
}

/// Changes an owning company may make to a job
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<Option<String>>,
    pub job_type: Option<JobType>,
    pub job_level: Option<JobLevel>,
    pub salary_min: Option<Option<i32>>,
    pub salary_max: Option<Option<i32>>,
    pub is_active: Option<bool>,
    /// Replaces the whole tag set when present; an empty list clears it
    pub tag_names: Option<Vec<String>>,
}

impl JobPatch {
    /// Applies the column changes; `tag_names` is handled by the job service
    pub fn apply_to(&self, job: &mut Job) {
        if let Some(title) = &self.title {
            job.title = title.clone();
        }
        if let Some(description) = &self.description {
            job.description = description.clone();
        }
        if let Some(location) = &self.location {
            job.location = location.clone();
        }
        if let Some(job_type) = self.job_type {
            job.job_type = job_type;
        }
        if let Some(job_level) = self.job_level {
            job.job_level = job_level;
        }
        if let Some(salary_min) = self.salary_min {
            job.salary_min = salary_min;
        }
        if let Some(salary_max) = self.salary_max {
            job.salary_max = salary_max;
        }
        if let Some(is_active) = self.is_active {
            job.is_active = is_active;
        }
        job.touch();
    }
}
