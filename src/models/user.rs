//! User Model
//!
//! Core user data structure returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User representation for external API responses
///
/// Identifiers are opaque strings; the API never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: String,

    /// User's display name
    pub name: String,

    /// User's email address
    pub email: String,

    /// Optional URL to user's profile picture
    pub profile_picture_url: Option<String>,

    /// Timestamp when the user account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user profile was last modified
    pub updated_at: DateTime<Utc>,
}
