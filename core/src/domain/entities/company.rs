//! Company entity representing an employer account that owns job postings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::job::Job;

/// Employer account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier, assigned by the repository on create
    pub id: i64,

    /// Login email, unique among companies
    pub email: String,

    pub company_name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub hashed_password: String,

    pub is_active: bool,

    /// Set by operators; never changed through the API
    pub is_verified: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Creates a new, not yet persisted, active and unverified company
    pub fn new(email: String, company_name: String, hashed_password: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email,
            company_name,
            description: None,
            website: None,
            location: None,
            hashed_password,
            is_active: true,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_profile(
        mut self,
        description: Option<String>,
        website: Option<String>,
        location: Option<String>,
    ) -> Self {
        self.description = description;
        self.website = website;
        self.location = location;
        self
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Whether the company owns the given job
    pub fn owns(&self, job: &Job) -> bool {
        job.company_id == self.id
    }
}

/// Company together with the jobs it has posted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyWithJobs {
    pub company: Company,
    pub jobs: Vec<Job>,
}
