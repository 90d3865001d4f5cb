//! Tag entity and tag-name normalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest tag name the schema stores
pub const MAX_TAG_NAME_LENGTH: usize = 100;

/// Free-form label attached to jobs, always stored trimmed and lower-cased
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    /// Creates a new, not yet persisted, tag from an already normalized name
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Normalizes a single raw tag name, returning `None` when nothing is left
pub fn normalize_tag_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Trims and lower-cases raw names, dropping empties and later duplicates.
/// First-occurrence order is kept.
pub fn normalize_tag_names<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<String> = Vec::new();
    for name in raw.into_iter().filter_map(|r| normalize_tag_name(r.as_ref())) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
