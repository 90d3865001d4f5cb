//! Error type definitions for authentication, tokens and input validation
//!
//! The messages are the ones surfaced to API clients, so they stay short and
//! never include internal details.

use thiserror::Error;

/// Authentication and authorization failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Bad, expired or unresolvable bearer token
    #[error("Could not validate credentials")]
    InvalidCredentials,

    /// Login with an unknown email or a wrong password
    #[error("Incorrect email or password")]
    IncorrectCredentials,

    #[error("Inactive user account")]
    InactiveUserAccount,

    #[error("Inactive company account")]
    InactiveCompanyAccount,

    /// Authenticated user is deactivated
    #[error("Inactive user")]
    InactiveUser,

    /// Authenticated company is deactivated
    #[error("Inactive company")]
    InactiveCompany,

    #[error("Only companies can access this endpoint")]
    CompanyOnly,

    #[error("This endpoint is for users only")]
    UserOnly,
}

impl AuthError {
    /// Whether this is one of the "account inactive" failures
    pub fn is_inactive(&self) -> bool {
        matches!(
            self,
            AuthError::InactiveUserAccount
                | AuthError::InactiveCompanyAccount
                | AuthError::InactiveUser
                | AuthError::InactiveCompany
        )
    }

    /// Whether this is a wrong-actor-kind failure
    pub fn is_forbidden(&self) -> bool {
        matches!(self, AuthError::CompanyOnly | AuthError::UserOnly)
    }
}

/// Token encoding and decoding failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Unsupported signing algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },
}

/// Input validation failures found by the domain layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid length: {field} (max: {max}, actual: {actual})")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Out of range: {field} (min: {min})")]
    BelowMinimum { field: String, min: i64 },
}
