//! Company account bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use jb_core::domain::entities::{Company, CompanyWithJobs};
use jb_core::domain::value_objects::{CompanyPatch, CompanyRegistration};

use super::{nullable, JobSummary};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterCompanyRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 255))]
    pub company_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub website: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(length(min = 8))]
    pub password: String,
}

impl From<RegisterCompanyRequest> for CompanyRegistration {
    fn from(request: RegisterCompanyRequest) -> Self {
        Self {
            email: request.email,
            company_name: request.company_name,
            description: request.description,
            website: request.website,
            location: request.location,
            password: request.password,
        }
    }
}

/// Partial profile update; `null` clears the optional profile fields
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub website: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
}

impl From<UpdateCompanyRequest> for CompanyPatch {
    fn from(request: UpdateCompanyRequest) -> Self {
        Self {
            company_name: request.company_name,
            description: request.description,
            website: request.website,
            location: request.location,
        }
    }
}

/// Public company fields, as embedded in a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub id: i64,
    pub email: String,
    pub company_name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyProfile {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            email: company.email,
            company_name: company.company_name,
            description: company.description,
            website: company.website,
            location: company.location,
            is_active: company.is_active,
            is_verified: company.is_verified,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

/// Company with a summary of each of its jobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyResponse {
    #[serde(flatten)]
    pub profile: CompanyProfile,
    pub jobs: Vec<JobSummary>,
}

impl From<CompanyWithJobs> for CompanyResponse {
    fn from(value: CompanyWithJobs) -> Self {
        Self {
            profile: value.company.into(),
            jobs: value.jobs.into_iter().map(JobSummary::from).collect(),
        }
    }
}
