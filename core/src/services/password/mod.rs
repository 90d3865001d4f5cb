//! Password hashing with bcrypt
//!
//! bcrypt is deliberately slow, so both operations run on tokio's blocking
//! pool instead of the calling worker thread.

use crate::errors::{DomainError, DomainResult};

/// Hashes and verifies account passwords
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    /// Create a service hashing with the given bcrypt work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plain password with a fresh salt
    pub async fn hash(&self, plain: &str) -> DomainResult<String> {
        let plain = plain.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing task failed");
                DomainError::internal("password hashing failed")
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                DomainError::internal("password hashing failed")
            })
    }

    /// Check a plain password against a stored hash.
    /// A malformed stored hash never verifies.
    pub async fn verify(&self, plain: &str, hashed: &str) -> bool {
        let plain = plain.to_string();
        let hashed = hashed.to_string();

        match tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hashed)).await {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
