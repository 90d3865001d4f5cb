//! Type definitions shared by the API and the domain layer
//!
//! - `pagination` - offset/limit window for list endpoints
//! - `response` - health check responses

pub mod pagination;
pub mod response;

pub use pagination::{Pagination, DEFAULT_LIMIT, MAX_LIMIT};
pub use response::{HealthResponse, HealthStatus, WelcomeResponse};
