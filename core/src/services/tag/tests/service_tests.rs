//! Unit tests for tag service

use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::errors::{DomainError, ValidationError};
use crate::repositories::MockTagRepository;
use crate::services::tag::TagService;

use super::mocks::{FoldingTagRepository, RacingTagRepository};

fn setup() -> (TagService, Arc<MockTagRepository>) {
    let tags = Arc::new(MockTagRepository::new());
    (TagService::new(tags.clone()), tags)
}

#[tokio::test]
async fn test_names_are_normalized_and_deduplicated() {
    let (service, repo) = setup();

    let tags = service
        .get_or_create_many(&["Python", " PYTHON ", "go", "  "])
        .await
        .unwrap();

    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["python", "go"]);
    assert_eq!(repo.count().await, 2);
}

#[tokio::test]
async fn test_existing_tags_are_reused() {
    let (service, repo) = setup();

    let first = service.get_or_create("rust").await.unwrap();
    let again = service.get_or_create_many(&["RUST", "sql"]).await.unwrap();

    assert_eq!(again[0].id, first.id);
    assert_eq!(repo.count().await, 2);
}

#[tokio::test]
async fn test_lost_creation_race_reuses_winner() {
    let repo = Arc::new(RacingTagRepository::with_existing("python").await);
    let service = TagService::new(repo.clone());

    let tag = service.get_or_create("python").await.unwrap();
    assert_eq!(tag.name, "python");
    assert_eq!(repo.lookups.load(Ordering::SeqCst), 2);
    assert_eq!(repo.inner.count().await, 1);
}

#[tokio::test]
async fn test_overlong_name_rejected_before_writing() {
    let (service, repo) = setup();
    let long = "x".repeat(101);

    let err = service
        .get_or_create_many(&["ok".to_string(), long])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationErr(ValidationError::TooLong { max: 100, actual: 101, .. })
    ));
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn test_list_all_is_alphabetical() {
    let (service, _) = setup();
    service.get_or_create_many(&["sql", "go", "rust"]).await.unwrap();

    let names: Vec<String> = service
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, vec!["go", "rust", "sql"]);
}

#[tokio::test]
async fn test_names_resolving_to_one_row_are_returned_once() {
    let repo = Arc::new(MockTagRepository::new());
    let service = TagService::new(Arc::new(FoldingTagRepository::new(repo.clone())));

    let tags = service
        .get_or_create_many(&["cafe", "café", "rust"])
        .await
        .unwrap();

    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["cafe", "rust"]);
    assert_eq!(repo.count().await, 2);
}
