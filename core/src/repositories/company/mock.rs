//! In-memory implementation of CompanyRepository for tests

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::company::Company;
use crate::errors::DomainError;

use super::trait_::CompanyRepository;

/// Mock company repository for testing
pub struct MockCompanyRepository {
    companies: Arc<RwLock<BTreeMap<i64, Company>>>,
    next_id: AtomicI64,
}

impl MockCompanyRepository {
    pub fn new() -> Self {
        Self {
            companies: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
        }
    }

    pub async fn count(&self) -> usize {
        self.companies.read().await.len()
    }
}

impl Default for MockCompanyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyRepository for MockCompanyRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, DomainError> {
        let companies = self.companies.read().await;
        Ok(companies.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Company>, DomainError> {
        let companies = self.companies.read().await;
        Ok(companies.values().find(|c| c.email == email).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Company>, DomainError> {
        let companies = self.companies.read().await;
        Ok(ids.iter().filter_map(|id| companies.get(id).cloned()).collect())
    }

    async fn list_all(&self) -> Result<Vec<Company>, DomainError> {
        let companies = self.companies.read().await;
        let mut all: Vec<Company> = companies.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn create(&self, mut company: Company) -> Result<Company, DomainError> {
        let mut companies = self.companies.write().await;

        if companies.values().any(|c| c.email == company.email) {
            return Err(DomainError::email_taken());
        }

        company.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn update(&self, company: Company) -> Result<Company, DomainError> {
        let mut companies = self.companies.write().await;

        if !companies.contains_key(&company.id) {
            return Err(DomainError::not_found("Company"));
        }

        companies.insert(company.id, company.clone());
        Ok(company)
    }
}
