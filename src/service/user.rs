//! User Service Implementation
//!
//! Placeholder business logic for user management. No storage backs this
//! service yet, so every read comes back empty and writes change nothing.

use crate::models::{User, UserCreate, UserUpdate};
use crate::utils::error::{AppError, AppResult};

/// User service exposing the CRUD operations the API layer delegates to
#[derive(Debug, Clone, Default)]
pub struct UserService;

impl UserService {
    /// Creates a new UserService instance
    pub fn new() -> Self {
        Self
    }

    /// Lists all users
    pub async fn get_all(&self) -> AppResult<Vec<User>> {
        log::debug!("Listing users: no user store configured, returning empty list");
        Ok(Vec::new())
    }

    /// Looks up a user by identifier; `None` when no such user exists
    pub async fn get_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        log::debug!("Looking up user {}: no user store configured", user_id);
        Ok(None)
    }

    /// Creates a new user
    pub async fn create(&self, data: UserCreate) -> AppResult<User> {
        log::debug!("Rejecting creation of user <{}>", data.email);
        Err(AppError::NotImplemented("User creation".to_string()))
    }

    /// Updates a user, returning the updated record or `None` if the user is unknown
    pub async fn update(&self, user_id: &str, data: UserUpdate) -> AppResult<Option<User>> {
        log::debug!("Update for user {} ignored: {:?}", user_id, data);
        Ok(None)
    }

    /// Deletes a user; `true` only if a user was removed
    pub async fn delete(&self, user_id: &str) -> AppResult<bool> {
        log::debug!("Delete for user {} ignored", user_id);
        Ok(false)
    }
}
