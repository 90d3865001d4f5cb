//! Token response value object returned by the login endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TOKEN_TYPE_BEARER;

/// Access token issued after a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed JWT to send as `Authorization: Bearer <token>`
    pub access_token: String,

    /// Always "bearer"
    pub token_type: String,
}

impl AuthResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
        }
    }
}
