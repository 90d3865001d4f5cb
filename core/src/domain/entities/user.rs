//! User entity representing an individual job seeker account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Individual user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the repository on create
    pub id: i64,

    /// Login email, unique among users
    pub email: String,

    pub full_name: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub hashed_password: String,

    /// Whether the account may log in and use protected routes
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, not yet persisted, active user
    pub fn new(email: String, full_name: String, hashed_password: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email,
            full_name,
            hashed_password,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Marks the row as modified
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
