//! Validation Utilities
//!
//! Input validation functions for user payloads.

use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use validator::{ValidationError, ValidationErrors};

use super::error::AppError;

/// Validates email address format
pub fn validate_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    regex.is_match(email.trim())
}

/// Validates that a name contains only allowed characters and length
pub fn validate_name(name: &str) -> bool {
    let trimmed = name.trim();

    if trimmed.is_empty() || trimmed.len() > 255 {
        return false;
    }

    // Letters, spaces, hyphens and apostrophes
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = NAME_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z\s\-']+$").expect("Failed to compile name regex"));

    regex.is_match(trimmed)
}

/// Validates URL format for profile pictures
pub fn validate_url(url: &str) -> bool {
    if url.is_empty() {
        return true;
    }

    static URL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = URL_REGEX.get_or_init(|| {
        Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").expect("Failed to compile URL regex")
    });

    regex.is_match(url) && url.len() <= 512
}

/// Custom validator for email fields using the validator crate
pub fn email_validator(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email")
            .with_message(Cow::Borrowed(messages::INVALID_EMAIL)))
    }
}

/// Custom validator for name fields using the validator crate
pub fn name_validator(name: &str) -> Result<(), ValidationError> {
    if validate_name(name) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_name")
            .with_message(Cow::Borrowed(messages::INVALID_NAME)))
    }
}

/// Custom validator for URL fields using the validator crate
pub fn url_validator(url: &str) -> Result<(), ValidationError> {
    if validate_url(url) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_url")
            .with_message(Cow::Borrowed(messages::INVALID_URL)))
    }
}

/// Flattens validator output into a `field: message` list, keeping the
/// per-field messages as structured details
pub fn handle_validation_error(err: ValidationErrors) -> AppError {
    let mut fields: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (field, errors) in err.field_errors() {
        for error in errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for field '{}'", field));
            fields.entry(field.to_string()).or_default().push(message);
        }
    }

    let message = fields
        .iter()
        .flat_map(|(field, msgs)| msgs.iter().map(move |m| format!("{}: {}", field, m)))
        .collect::<Vec<_>>()
        .join(", ");

    AppError::InvalidFields {
        message,
        fields: serde_json::json!(fields),
    }
}

/// Validation error messages for user-friendly responses
pub mod messages {
    pub const INVALID_EMAIL: &str = "Please enter a valid email address";
    pub const INVALID_NAME: &str =
        "Name must contain only letters, spaces, hyphens, and apostrophes";
    pub const INVALID_URL: &str = "Please enter a valid URL starting with http:// or https://";
}
