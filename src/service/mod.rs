//! Service Layer
//!
//! Business logic layer for the users API.

pub mod user;

// Re-export services
pub use user::UserService;
