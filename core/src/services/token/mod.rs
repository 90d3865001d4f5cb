//! Token service module for JWT management
//!
//! Issues and verifies the access tokens handed out by the login endpoints.
//! Tokens are signed with a shared secret (HS256/HS384/HS512).

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
