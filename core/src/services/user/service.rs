//! User service implementation

use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::value_objects::{UserPatch, UserRegistration};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordService;

pub struct UserService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<PasswordService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, passwords: Arc<PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// Register a new user account
    ///
    /// # Returns
    /// * `Ok(User)` - The stored, active user
    /// * `Err(DomainError::Conflict)` - Email already registered
    pub async fn register(&self, registration: UserRegistration) -> DomainResult<User> {
        if self.users.find_by_email(&registration.email).await?.is_some() {
            return Err(DomainError::email_taken());
        }

        let hashed = self.passwords.hash(&registration.password).await?;
        let user = User::new(registration.email, registration.full_name, hashed);

        // A concurrent registration may still win the unique index
        let user = self.users.create(user).await.map_err(|e| {
            if e.is_conflict() {
                DomainError::email_taken()
            } else {
                e
            }
        })?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Apply a partial update to the user's own profile
    pub async fn update_profile(&self, mut user: User, patch: &UserPatch) -> DomainResult<User> {
        if patch.is_empty() {
            return Ok(user);
        }

        patch.apply_to(&mut user);
        let user = self.users.update(user).await?;
        tracing::debug!(user_id = user.id, "User profile updated");
        Ok(user)
    }
}
