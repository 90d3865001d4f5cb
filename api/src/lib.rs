//! HTTP API of the JobBoard backend
//!
//! - `app` - service wiring and the application factory
//! - `dto` - request and response bodies
//! - `handlers` - error mapping and system endpoints
//! - `middleware` - authentication extractors and CORS
//! - `routes` - resource endpoints

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState, Repositories};
