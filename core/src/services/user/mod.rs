//! Individual user accounts: registration and profile updates.

mod service;


pub use service::UserService;
