//! Job postings: creation, ownership-checked updates and search.

mod service;

#[cfg(test)]
mod tests;

pub use service::JobService;
