//! Tag service implementation

use std::sync::Arc;

use crate::domain::entities::{normalize_tag_names, Tag, MAX_TAG_NAME_LENGTH};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::TagRepository;

pub struct TagService {
    tags: Arc<dyn TagRepository>,
}

impl TagService {
    pub fn new(tags: Arc<dyn TagRepository>) -> Self {
        Self { tags }
    }

    /// Look up a tag by its normalized name, creating it when missing
    ///
    /// Losing a creation race to another request surfaces as a conflict
    /// from the repository; the winner's row is then re-read and reused.
    pub async fn get_or_create(&self, name: &str) -> DomainResult<Tag> {
        if let Some(tag) = self.tags.find_by_name(name).await? {
            return Ok(tag);
        }

        match self.tags.create(Tag::new(name.to_string())).await {
            Ok(tag) => {
                tracing::debug!(tag_id = tag.id, name, "Tag created");
                Ok(tag)
            }
            Err(e) if e.is_conflict() => {
                tracing::debug!(name, "Tag created concurrently, reusing");
                self.tags.find_by_name(name).await?.ok_or(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Resolve raw tag names into stored tags
    ///
    /// Names are trimmed, lower-cased and deduplicated first; empty names are
    /// dropped. The result keeps first-occurrence order and holds each
    /// stored tag once.
    pub async fn get_or_create_many<S: AsRef<str>>(&self, raw: &[S]) -> DomainResult<Vec<Tag>> {
        let names = normalize_tag_names(raw);

        if let Some(long) = names.iter().find(|n| n.chars().count() > MAX_TAG_NAME_LENGTH) {
            return Err(ValidationError::TooLong {
                field: "tag_names".to_string(),
                max: MAX_TAG_NAME_LENGTH,
                actual: long.chars().count(),
            }
            .into());
        }

        let mut tags: Vec<Tag> = Vec::with_capacity(names.len());
        for name in &names {
            let tag = self.get_or_create(name).await?;
            // Distinct names may still resolve to one stored row
            if !tags.iter().any(|t| t.id == tag.id) {
                tags.push(tag);
            }
        }
        Ok(tags)
    }

    /// Every tag, alphabetically
    pub async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        self.tags.list_all().await
    }
}
