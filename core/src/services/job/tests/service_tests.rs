//! Unit tests for job service

use std::sync::Arc;

use jb_shared::Pagination;

use crate::domain::entities::{Company, JobType, NewJob};
use crate::domain::value_objects::{JobFilter, JobPatch};
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{
    CompanyRepository, MockCompanyRepository, MockJobRepository, MockTagRepository,
};
use crate::services::job::JobService;
use crate::services::tag::tests::mocks::FoldingTagRepository;
use crate::services::tag::TagService;

struct Fixture {
    service: JobService,
    companies: Arc<MockCompanyRepository>,
    jobs: Arc<MockJobRepository>,
    tags: Arc<MockTagRepository>,
}

impl Fixture {
    fn new() -> Self {
        let companies = Arc::new(MockCompanyRepository::new());
        let tags = Arc::new(MockTagRepository::new());
        let jobs = Arc::new(MockJobRepository::new(companies.clone(), tags.clone()));
        let service = JobService::new(jobs.clone(), Arc::new(TagService::new(tags.clone())));
        Self {
            service,
            companies,
            jobs,
            tags,
        }
    }

    async fn company(&self, email: &str) -> Company {
        self.companies
            .create(Company::new(email.into(), "Acme".into(), "hash".into()))
            .await
            .unwrap()
    }
}

fn new_job(title: &str, tags: &[&str]) -> NewJob {
    NewJob {
        title: title.to_string(),
        description: "Write code".to_string(),
        location: Some("Berlin, Germany".to_string()),
        tag_names: tags.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_normalizes_tags() {
    let fx = Fixture::new();
    let acme = fx.company("hr@acme.io").await;

    let details = fx
        .service
        .create(&acme, new_job("Backend", &["Python", " PYTHON ", "go"]))
        .await
        .unwrap();

    assert_eq!(details.tag_names(), vec!["go", "python"]);
    assert_eq!(details.company.id, acme.id);
    assert!(details.job.is_active);
    assert_eq!(fx.tags.count().await, 2);

    let stored = fx.service.get(details.job.id).await.unwrap();
    assert_eq!(stored.tag_names(), vec!["go", "python"]);
}

#[tokio::test]
async fn test_create_rejects_negative_salary() {
    let fx = Fixture::new();
    let acme = fx.company("hr@acme.io").await;

    let mut job = new_job("Backend", &[]);
    job.salary_min = Some(-1);
    let err = fx.service.create(&acme, job).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::BelowMinimum { .. })
    ));
    assert_eq!(fx.jobs.count().await, 0);
}

#[tokio::test]
async fn test_get_unknown_job() {
    let fx = Fixture::new();
    let err = fx.service.get(7).await.unwrap_err();
    assert_eq!(err.to_string(), "Job not found");
}

#[tokio::test]
async fn test_update_by_other_company_is_forbidden() {
    let fx = Fixture::new();
    let acme = fx.company("hr@acme.io").await;
    let globex = fx.company("hr@globex.io").await;
    let job = fx.service.create(&acme, new_job("Backend", &[])).await.unwrap();

    let patch = JobPatch {
        title: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let err = fx.service.update(&globex, job.job.id, &patch).await.unwrap_err();
    assert!(matches!(err, DomainError::Forbidden { .. }));
    assert_eq!(err.to_string(), "Not authorized to update this job");

    let stored = fx.service.get(job.job.id).await.unwrap();
    assert_eq!(stored.job.title, "Backend");
}

#[tokio::test]
async fn test_update_missing_job_is_not_found() {
    let fx = Fixture::new();
    let acme = fx.company("hr@acme.io").await;
    let err = fx
        .service
        .update(&acme, 404, &JobPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_update_fields_and_tags() {
    let fx = Fixture::new();
    let acme = fx.company("hr@acme.io").await;
    let job = fx
        .service
        .create(&acme, new_job("Backend", &["rust", "sql"]))
        .await
        .unwrap();

    let patch = JobPatch {
        title: Some("Senior Backend".to_string()),
        location: Some(None),
        job_type: Some(JobType::Remote),
        is_active: Some(false),
        tag_names: Some(vec!["Go".to_string()]),
        ..Default::default()
    };
    let updated = fx.service.update(&acme, job.job.id, &patch).await.unwrap();

    assert_eq!(updated.job.title, "Senior Backend");
    assert_eq!(updated.job.location, None);
    assert_eq!(updated.job.job_type, JobType::Remote);
    assert!(!updated.job.is_active);
    assert_eq!(updated.tag_names(), vec!["go"]);
}

#[tokio::test]
async fn test_update_without_tag_names_keeps_tags() {
    let fx = Fixture::new();
    let acme = fx.company("hr@acme.io").await;
    let job = fx.service.create(&acme, new_job("Backend", &["rust"])).await.unwrap();

    let patch = JobPatch {
        description: Some("New description".to_string()),
        ..Default::default()
    };
    let updated = fx.service.update(&acme, job.job.id, &patch).await.unwrap();
    assert_eq!(updated.tag_names(), vec!["rust"]);

    let cleared = JobPatch {
        tag_names: Some(Vec::new()),
        ..Default::default()
    };
    let updated = fx.service.update(&acme, job.job.id, &cleared).await.unwrap();
    assert!(updated.tags.is_empty());
}

#[tokio::test]
async fn test_delete_checks_ownership() {
    let fx = Fixture::new();
    let acme = fx.company("hr@acme.io").await;
    let globex = fx.company("hr@globex.io").await;
    let job = fx.service.create(&acme, new_job("Backend", &[])).await.unwrap();

    let err = fx.service.delete(&globex, job.job.id).await.unwrap_err();
    assert_eq!(err.to_string(), "Not authorized to delete this job");

    fx.service.delete(&acme, job.job.id).await.unwrap();
    assert_eq!(fx.jobs.count().await, 0);
    assert!(matches!(
        fx.service.delete(&acme, job.job.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_search_excludes_inactive_and_uses_or_tags() {
    let fx = Fixture::new();
    let acme = fx.company("hr@acme.io").await;

    let ab = fx.service.create(&acme, new_job("AB", &["a", "b"])).await.unwrap();
    let c = fx.service.create(&acme, new_job("C", &["c"])).await.unwrap();
    let hidden = fx.service.create(&acme, new_job("Hidden", &["b"])).await.unwrap();
    let off = JobPatch {
        is_active: Some(false),
        ..Default::default()
    };
    fx.service.update(&acme, hidden.job.id, &off).await.unwrap();

    let found = fx
        .service
        .search(&JobFilter::default().with_tags("b,c"))
        .await
        .unwrap();
    let ids: Vec<i64> = found.iter().map(|d| d.job.id).collect();
    assert_eq!(ids, vec![c.job.id, ab.job.id]);
    assert!(found.iter().all(|d| d.job.is_active));
}

#[tokio::test]
async fn test_search_limit_one_returns_newest() {
    let fx = Fixture::new();
    let acme = fx.company("hr@acme.io").await;
    fx.service.create(&acme, new_job("Old", &[])).await.unwrap();
    let newest = fx.service.create(&acme, new_job("New", &[])).await.unwrap();

    let found = fx
        .service
        .search(&JobFilter::default().with_page(0, 1))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].job.id, newest.job.id);
}

#[tokio::test]
async fn test_search_rejects_negative_salary_filter() {
    let fx = Fixture::new();
    let filter = JobFilter {
        salary_max: Some(-5),
        ..Default::default()
    };
    assert!(fx.service.search(&filter).await.is_err());
}

#[tokio::test]
async fn test_company_jobs_include_inactive() {
    let fx = Fixture::new();
    let acme = fx.company("hr@acme.io").await;
    let globex = fx.company("hr@globex.io").await;

    let job = fx.service.create(&acme, new_job("Backend", &[])).await.unwrap();
    fx.service.create(&globex, new_job("Other", &[])).await.unwrap();
    let off = JobPatch {
        is_active: Some(false),
        ..Default::default()
    };
    fx.service.update(&acme, job.job.id, &off).await.unwrap();

    let mine = fx
        .service
        .company_jobs(acme.id, Pagination::default())
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert!(!mine[0].job.is_active);
}

#[tokio::test]
async fn test_tags_folding_to_one_row_link_once() {
    let companies = Arc::new(MockCompanyRepository::new());
    let tags = Arc::new(MockTagRepository::new());
    let jobs = Arc::new(MockJobRepository::new(companies.clone(), tags.clone()));
    let folding = Arc::new(FoldingTagRepository::new(tags.clone()));
    let service = JobService::new(jobs, Arc::new(TagService::new(folding)));
    let acme = companies
        .create(Company::new("hr@acme.io".into(), "Acme".into(), "hash".into()))
        .await
        .unwrap();

    let details = service
        .create(&acme, new_job("Barista", &["cafe", "café"]))
        .await
        .unwrap();
    assert_eq!(details.tags.len(), 1);

    let patch = JobPatch {
        tag_names: Some(vec!["café".into(), "CAFE".into(), "espresso".into()]),
        ..Default::default()
    };
    let updated = service.update(&acme, details.job.id, &patch).await.unwrap();
    let names: Vec<&str> = updated.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["cafe", "espresso"]);
}
