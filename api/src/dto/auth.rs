//! Login form and token response

use serde::{Deserialize, Serialize};
use validator::Validate;

use jb_core::domain::value_objects::AuthResponse;

/// OAuth2 password-flow form; `username` carries the email
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl From<AuthResponse> for TokenResponse {
    fn from(response: AuthResponse) -> Self {
        Self {
            access_token: response.access_token,
            token_type: response.token_type,
        }
    }
}
