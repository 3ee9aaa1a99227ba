//! HTTP Request Handlers
//!
//! Axum handlers for processing HTTP requests and responses.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use super::extract::AppJson;
use crate::{
    models::{HealthCheckResponse, User, UserCreate, UserUpdate},
    service::UserService,
    utils::{
        error::{AppError, AppResult},
        validation::handle_validation_error,
    },
    VERSION,
};

/// Application state shared across handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(user_service: UserService) -> Self {
        Self {
            user_service: Arc::new(user_service),
        }
    }
}

/// List all users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.get_all().await?;
    Ok(Json(users))
}

/// Get user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<User>> {
    state
        .user_service
        .get_by_id(&user_id)
        .await?
        .map(Json)
        .ok_or_else(AppError::user_not_found)
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(request): AppJson<UserCreate>,
) -> AppResult<(StatusCode, Json<User>)> {
    request.validate().map_err(handle_validation_error)?;

    let user = state.user_service.create(request).await?;
    log::info!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update user
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AppJson(request): AppJson<UserUpdate>,
) -> AppResult<Json<User>> {
    request.validate().map_err(handle_validation_error)?;

    state
        .user_service
        .update(&user_id, request)
        .await?
        .map(Json)
        .ok_or_else(AppError::user_not_found)
}

/// Delete user
///
/// Always answers 204, whether or not a user was removed.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<StatusCode> {
    if state.user_service.delete(&user_id).await? {
        log::info!("Deleted user {}", user_id);
    } else {
        log::debug!("No user removed for {}", user_id);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok(VERSION))
}

/// Fallback for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
