//! Unit tests for company service

use std::sync::Arc;

use crate::domain::entities::Job;
use crate::domain::value_objects::{CompanyPatch, CompanyRegistration};
use crate::errors::DomainError;
use crate::repositories::{
    JobRepository, MockCompanyRepository, MockJobRepository, MockTagRepository,
};
use crate::services::company::CompanyService;
use crate::services::password::PasswordService;

struct Fixture {
    service: CompanyService,
    companies: Arc<MockCompanyRepository>,
    jobs: Arc<MockJobRepository>,
}

fn setup() -> Fixture {
    let companies = Arc::new(MockCompanyRepository::new());
    let tags = Arc::new(MockTagRepository::new());
    let jobs = Arc::new(MockJobRepository::new(companies.clone(), tags));
    let service = CompanyService::new(
        companies.clone(),
        jobs.clone(),
        Arc::new(PasswordService::new(4)),
    );
    Fixture {
        service,
        companies,
        jobs,
    }
}

fn registration(email: &str, name: &str) -> CompanyRegistration {
    CompanyRegistration {
        email: email.to_string(),
        company_name: name.to_string(),
        description: Some("We build things".to_string()),
        website: None,
        location: Some("Berlin".to_string()),
        password: "password123".to_string(),
    }
}

#[tokio::test]
async fn test_register_starts_active_and_unverified() {
    let fx = setup();

    let company = fx.service.register(registration("hr@acme.io", "Acme")).await.unwrap();
    assert!(company.id > 0);
    assert!(company.is_active);
    assert!(!company.is_verified);
    assert_eq!(company.location.as_deref(), Some("Berlin"));
    assert_ne!(company.hashed_password, "password123");
}

#[tokio::test]
async fn test_duplicate_registration() {
    let fx = setup();
    fx.service.register(registration("hr@acme.io", "Acme")).await.unwrap();

    let err = fx
        .service
        .register(registration("hr@acme.io", "Acme Again"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
    assert_eq!(fx.companies.count().await, 1);
}

#[tokio::test]
async fn test_list_attaches_jobs_in_id_order() {
    let fx = setup();
    let acme = fx.service.register(registration("hr@acme.io", "Acme")).await.unwrap();
    let globex = fx.service.register(registration("hr@globex.io", "Globex")).await.unwrap();

    let first = fx
        .jobs
        .create(Job::new(acme.id, "First".into(), "d".into()), &[])
        .await
        .unwrap();
    let second = fx
        .jobs
        .create(Job::new(acme.id, "Second".into(), "d".into()), &[])
        .await
        .unwrap();

    let listed = fx.service.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].company.id, acme.id);
    let ids: Vec<i64> = listed[0].jobs.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(listed[1].company.id, globex.id);
    assert!(listed[1].jobs.is_empty());
}

#[tokio::test]
async fn test_get_unknown_company() {
    let fx = setup();
    let err = fx.service.get(99).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    assert_eq!(err.to_string(), "Company not found");
}

#[tokio::test]
async fn test_update_profile_clears_nullable_fields() {
    let fx = setup();
    let company = fx.service.register(registration("hr@acme.io", "Acme")).await.unwrap();

    let patch = CompanyPatch {
        company_name: Some("Acme Corp".to_string()),
        description: Some(None),
        ..Default::default()
    };
    let updated = fx.service.update_profile(company, &patch).await.unwrap();
    assert_eq!(updated.company.company_name, "Acme Corp");
    assert_eq!(updated.company.description, None);
    assert_eq!(updated.company.location.as_deref(), Some("Berlin"));

    let stored = fx.service.get(updated.company.id).await.unwrap();
    assert_eq!(stored.company.company_name, "Acme Corp");
}
