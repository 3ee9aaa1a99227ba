//! Data Models Module
//!
//! Data structures used throughout the users API: the user entity and the
//! request/response payloads.

pub mod requests;
pub mod user;

// Re-export commonly used types
pub use requests::*;
pub use user::*;
