//! Configuration for the token service

use jsonwebtoken::Algorithm;

use jb_shared::JwtConfig;

use crate::errors::{DomainResult, TokenError};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: 30,
        }
    }
}

impl TokenServiceConfig {
    /// Build from the application's JWT settings, accepting only the
    /// shared-secret algorithms
    pub fn from_jwt_config(config: &JwtConfig) -> DomainResult<Self> {
        let algorithm = match config.algorithm.to_uppercase().as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(TokenError::UnsupportedAlgorithm {
                    algorithm: other.to_string(),
                }
                .into())
            }
        };

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            access_token_expiry_minutes: config.access_token_expire_minutes,
        })
    }
}
