//! Unit tests for mock job repository

use std::sync::Arc;

use chrono::{Duration, Utc};
use jb_shared::Pagination;

use crate::domain::entities::{Company, Job, Tag};
use crate::domain::value_objects::JobFilter;
use crate::repositories::company::{CompanyRepository, MockCompanyRepository};
use crate::repositories::job::{JobRepository, MockJobRepository};
use crate::repositories::tag::{MockTagRepository, TagRepository};

struct Fixture {
    jobs: MockJobRepository,
    tags: Arc<MockTagRepository>,
    company: Company,
}

async fn fixture() -> Fixture {
    let companies = Arc::new(MockCompanyRepository::new());
    let tags = Arc::new(MockTagRepository::new());
    let company = companies
        .create(Company::new("hr@acme.io".into(), "Acme".into(), "h".into()))
        .await
        .unwrap();

    Fixture {
        jobs: MockJobRepository::new(companies, tags.clone()),
        tags,
        company,
    }
}

#[tokio::test]
async fn test_create_and_find_with_details() {
    let fx = fixture().await;
    let rust = fx.tags.create(Tag::new("rust".into())).await.unwrap();
    let go = fx.tags.create(Tag::new("go".into())).await.unwrap();

    let job = fx
        .jobs
        .create(Job::new(fx.company.id, "Engineer".into(), "Code".into()), &[rust.id, go.id])
        .await
        .unwrap();

    let details = fx.jobs.find_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(details.company.id, fx.company.id);
    assert_eq!(details.tag_names(), vec!["go", "rust"]);
}

#[tokio::test]
async fn test_create_rejects_unknown_company() {
    let fx = fixture().await;
    let result = fx.jobs.create(Job::new(999, "T".into(), "D".into()), &[]).await;
    assert!(result.is_err());
    assert_eq!(fx.jobs.count().await, 0);
}

#[tokio::test]
async fn test_search_orders_newest_first_with_id_tiebreak() {
    let fx = fixture().await;
    let now = Utc::now();

    let mut older = Job::new(fx.company.id, "Older".into(), "D".into());
    older.created_at = now - Duration::hours(1);
    let mut first = Job::new(fx.company.id, "First".into(), "D".into());
    first.created_at = now;
    let mut second = Job::new(fx.company.id, "Second".into(), "D".into());
    second.created_at = now;

    for job in [older, first, second] {
        fx.jobs.create(job, &[]).await.unwrap();
    }

    let titles: Vec<String> = fx
        .jobs
        .search(&JobFilter::default())
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.job.title)
        .collect();
    assert_eq!(titles, vec!["Second", "First", "Older"]);

    let top = fx.jobs.search(&JobFilter::default().with_page(0, 1)).await.unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].job.title, "Second");
}

#[tokio::test]
async fn test_update_replaces_tags_only_when_given() {
    let fx = fixture().await;
    let rust = fx.tags.create(Tag::new("rust".into())).await.unwrap();
    let job = fx
        .jobs
        .create(Job::new(fx.company.id, "T".into(), "D".into()), &[rust.id])
        .await
        .unwrap();

    let mut renamed = job.clone();
    renamed.title = "Renamed".into();
    fx.jobs.update(renamed.clone(), None).await.unwrap();
    let details = fx.jobs.find_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(details.job.title, "Renamed");
    assert_eq!(details.tag_names(), vec!["rust"]);

    fx.jobs.update(renamed, Some(&[][..])).await.unwrap();
    let details = fx.jobs.find_by_id(job.id).await.unwrap().unwrap();
    assert!(details.tags.is_empty());
}

#[tokio::test]
async fn test_delete_and_company_listing() {
    let fx = fixture().await;
    let a = fx
        .jobs
        .create(Job::new(fx.company.id, "A".into(), "D".into()), &[])
        .await
        .unwrap();
    let mut inactive = Job::new(fx.company.id, "B".into(), "D".into());
    inactive.is_active = false;
    fx.jobs.create(inactive, &[]).await.unwrap();

    let own = fx.jobs.find_by_company(fx.company.id, Pagination::default()).await.unwrap();
    assert_eq!(own.len(), 2);

    let grouped = fx.jobs.find_by_company_ids(&[fx.company.id, 77]).await.unwrap();
    assert_eq!(grouped[&fx.company.id].len(), 2);
    assert!(!grouped.contains_key(&77));

    assert!(fx.jobs.delete(a.id).await.unwrap());
    assert!(!fx.jobs.delete(a.id).await.unwrap());
    assert!(fx.jobs.find_by_id(a.id).await.unwrap().is_none());
}
