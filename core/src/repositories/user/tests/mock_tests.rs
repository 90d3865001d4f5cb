//! Unit tests for mock user repository

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

fn user(email: &str) -> User {
    User::new(email.to_string(), "Test User".to_string(), "hash".to_string())
}

#[tokio::test]
async fn test_mock_repository_create_assigns_ids() {
    let repo = MockUserRepository::new();

    let first = repo.create(user("a@example.com")).await.unwrap();
    let second = repo.create(user("b@example.com")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let found = repo.find_by_id(second.id).await.unwrap();
    assert_eq!(found.unwrap().email, "b@example.com");
}

#[tokio::test]
async fn test_mock_repository_find_by_email() {
    let repo = MockUserRepository::new();
    repo.create(user("a@example.com")).await.unwrap();

    assert!(repo.find_by_email("a@example.com").await.unwrap().is_some());
    assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_repository_duplicate_email() {
    let repo = MockUserRepository::new();
    repo.create(user("dup@example.com")).await.unwrap();

    let result = repo.create(user("dup@example.com")).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_mock_repository_update() {
    let repo = MockUserRepository::new();
    let mut created = repo.create(user("a@example.com")).await.unwrap();

    created.full_name = "Renamed".to_string();
    let updated = repo.update(created).await.unwrap();
    assert_eq!(updated.full_name, "Renamed");

    let mut ghost = user("ghost@example.com");
    ghost.id = 99;
    assert!(matches!(repo.update(ghost).await, Err(DomainError::NotFound { .. })));
}
