//! In-memory implementation of TagRepository for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::tag::Tag;
use crate::errors::DomainError;

use super::trait_::TagRepository;

/// Mock tag repository for testing
pub struct MockTagRepository {
    tags: Arc<RwLock<HashMap<i64, Tag>>>,
    next_id: AtomicI64,
}

impl MockTagRepository {
    pub fn new() -> Self {
        Self {
            tags: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Tags with the given IDs, unknown IDs skipped
    pub async fn find_by_ids(&self, ids: &[i64]) -> Vec<Tag> {
        let tags = self.tags.read().await;
        ids.iter().filter_map(|id| tags.get(id).cloned()).collect()
    }

    pub async fn count(&self) -> usize {
        self.tags.read().await.len()
    }
}

impl Default for MockTagRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagRepository for MockTagRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, DomainError> {
        let tags = self.tags.read().await;
        Ok(tags.values().find(|t| t.name == name).cloned())
    }

    async fn create(&self, mut tag: Tag) -> Result<Tag, DomainError> {
        let mut tags = self.tags.write().await;

        if tags.values().any(|t| t.name == tag.name) {
            return Err(DomainError::Conflict {
                message: format!("Tag '{}' already exists", tag.name),
            });
        }

        tag.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        tags.insert(tag.id, tag.clone());
        Ok(tag)
    }

    async fn list_all(&self) -> Result<Vec<Tag>, DomainError> {
        let tags = self.tags.read().await;
        let mut all: Vec<Tag> = tags.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}
