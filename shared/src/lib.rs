//! Shared configuration and common types for the JobBoard server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types and the layered loader
//! - Error response structure and error codes
//! - Pagination and health response types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use crate::config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LogFormat, LoggingConfig, ServerConfig,
};
pub use crate::errors::{error_codes, ErrorResponse};
pub use crate::types::{HealthResponse, Pagination, WelcomeResponse};
