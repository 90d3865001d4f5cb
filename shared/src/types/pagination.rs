//! Offset based pagination for list endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u32 = 100;
pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 100;

/// `skip`/`limit` window applied after ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Number of rows to skip
    #[serde(default)]
    pub skip: u32,

    /// Maximum number of rows to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Create a new pagination, clamping the limit into range
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.clamp(MIN_LIMIT, MAX_LIMIT),
        }
    }

    /// Whether the limit is inside the accepted range
    pub fn is_valid(&self) -> bool {
        (MIN_LIMIT..=MAX_LIMIT).contains(&self.limit)
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        self.skip as i64
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        self.limit as i64
    }

    /// Apply the window to an already ordered iterator
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.skip as usize)
            .take(self.limit as usize)
            .collect()
    }
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
