//! Request handlers shared across routes: error mapping and system endpoints.

pub mod error;
pub mod system;

pub use error::{ApiError, ApiResult};
