//! Company service implementation

use std::sync::Arc;

use crate::domain::entities::{Company, CompanyWithJobs};
use crate::domain::value_objects::{CompanyPatch, CompanyRegistration};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{CompanyRepository, JobRepository};
use crate::services::password::PasswordService;

pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
    jobs: Arc<dyn JobRepository>,
    passwords: Arc<PasswordService>,
}

impl CompanyService {
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        jobs: Arc<dyn JobRepository>,
        passwords: Arc<PasswordService>,
    ) -> Self {
        Self {
            companies,
            jobs,
            passwords,
        }
    }

    /// Register a new company account
    ///
    /// New companies start active and unverified.
    pub async fn register(&self, registration: CompanyRegistration) -> DomainResult<Company> {
        if self.companies.find_by_email(&registration.email).await?.is_some() {
            return Err(DomainError::email_taken());
        }

        let hashed = self.passwords.hash(&registration.password).await?;
        let company = Company::new(registration.email, registration.company_name, hashed)
            .with_profile(
                registration.description,
                registration.website,
                registration.location,
            );

        let company = self.companies.create(company).await.map_err(|e| {
            if e.is_conflict() {
                DomainError::email_taken()
            } else {
                e
            }
        })?;

        tracing::info!(company_id = company.id, "Company registered");
        Ok(company)
    }

    /// All companies in ID order, each with its jobs
    pub async fn list(&self) -> DomainResult<Vec<CompanyWithJobs>> {
        let companies = self.companies.list_all().await?;
        let ids: Vec<i64> = companies.iter().map(|c| c.id).collect();
        let mut jobs = self.jobs.find_by_company_ids(&ids).await?;

        Ok(companies
            .into_iter()
            .map(|company| {
                let jobs = jobs.remove(&company.id).unwrap_or_default();
                CompanyWithJobs { company, jobs }
            })
            .collect())
    }

    /// A single company with its jobs
    pub async fn get(&self, id: i64) -> DomainResult<CompanyWithJobs> {
        let company = self
            .companies
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Company"))?;
        self.with_jobs(company).await
    }

    /// Attach the company's jobs to an already loaded company
    pub async fn with_jobs(&self, company: Company) -> DomainResult<CompanyWithJobs> {
        let jobs = self
            .jobs
            .find_by_company_ids(&[company.id])
            .await?
            .remove(&company.id)
            .unwrap_or_default();
        Ok(CompanyWithJobs { company, jobs })
    }

    /// Apply a partial update to the company's own profile
    pub async fn update_profile(
        &self,
        mut company: Company,
        patch: &CompanyPatch,
    ) -> DomainResult<CompanyWithJobs> {
        if !patch.is_empty() {
            patch.apply_to(&mut company);
            company = self.companies.update(company).await?;
            tracing::debug!(company_id = company.id, "Company profile updated");
        }
        self.with_jobs(company).await
    }
}
