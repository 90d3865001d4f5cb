//! Request middleware and extractors
//!
//! - `auth` - bearer token extractors for protected routes
//! - `cors` - cross-origin configuration

pub mod auth;
pub mod cors;

pub use auth::{CurrentCompany, CurrentUser};
pub use cors::create_cors;
