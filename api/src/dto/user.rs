//! User account bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use jb_core::domain::entities::User;
use jb_core::domain::value_objects::{UserPatch, UserRegistration};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 255))]
    pub full_name: String,
    #[validate(length(min = 8))]
    pub password: String,
}

impl From<RegisterUserRequest> for UserRegistration {
    fn from(request: RegisterUserRequest) -> Self {
        Self {
            email: request.email,
            full_name: request.full_name,
            password: request.password,
        }
    }
}

/// Partial profile update; absent and `null` both leave the name unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            full_name: request.full_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
