//! Tag lookup and on-demand creation.

mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use service::TagService;
