//! Company accounts and their job listings.

mod service;

#[cfg(test)]
mod tests;

pub use service::CompanyService;
