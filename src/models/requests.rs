//! Request and Response Models
//!
//! Data structures for API request and response payloads with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{email_validator, name_validator, url_validator};

/// Request payload for creating a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserCreate {
    /// User's display name (1-255 characters)
    #[validate(custom(function = "name_validator"))]
    pub name: String,

    /// User's email address
    #[validate(custom(function = "email_validator"))]
    pub email: String,

    /// Optional URL to user's profile picture
    #[validate(custom(function = "url_validator"))]
    pub profile_picture_url: Option<String>,
}

/// Request payload for updating a user; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserUpdate {
    #[validate(custom(function = "name_validator"))]
    pub name: Option<String>,

    #[validate(custom(function = "email_validator"))]
    pub email: Option<String>,

    #[validate(custom(function = "url_validator"))]
    pub profile_picture_url: Option<String>,
}

/// Response for health check
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
}

impl HealthCheckResponse {
    pub fn ok(version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            version: version.to_string(),
        }
    }
}
