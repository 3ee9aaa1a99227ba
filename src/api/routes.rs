//! API Route Definitions
//!
//! This module defines all HTTP routes and their corresponding handlers using a
//! builder pattern. The RouterBuilder allows selective enabling/disabling of
//! API endpoints, and [`create_app`] assembles the complete application with
//! middleware and state.

use axum::{routing::MethodRouter, Router};
use tower::ServiceBuilder;

use super::handlers::*;
use super::middleware::{cors_layer, trace_layer};
use crate::config::AppConfig;

/// Prefix under which the user endpoints are mounted
pub const USERS_PATH: &str = "/api/users";

/// Builder for creating API routes with configurable endpoints
#[derive(Debug, Default)]
pub struct RouterBuilder {
    /// Whether to enable the health check endpoint (GET /health)
    health_check: bool,
    /// Whether to enable the user listing endpoint (GET /api/users/)
    list_users: bool,
    /// Whether to enable the user retrieval endpoint (GET /api/users/{user_id})
    get_user: bool,
    /// Whether to enable the user creation endpoint (POST /api/users/)
    create_user: bool,
    /// Whether to enable the user update endpoint (PUT /api/users/{user_id})
    update_user: bool,
    /// Whether to enable the user deletion endpoint (DELETE /api/users/{user_id})
    delete_user: bool,
}

impl RouterBuilder {
    /// Creates a new router builder with all routes disabled by default
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a router builder with all routes enabled
    pub fn with_all_routes() -> Self {
        Self {
            health_check: true,
            list_users: true,
            get_user: true,
            create_user: true,
            update_user: true,
            delete_user: true,
        }
    }

    /// Creates a router builder exposing only the read endpoints
    ///
    /// Good for user directories that never modify user data.
    pub fn with_readonly_routes() -> Self {
        Self {
            health_check: true,
            list_users: true,
            get_user: true,
            create_user: false,
            update_user: false,
            delete_user: false,
        }
    }

    /// Creates a router with only the health check endpoint
    pub fn with_minimal_routes() -> Self {
        Self {
            health_check: true,
            ..Self::default()
        }
    }

    /// Enables or disables the health check endpoint (GET /health)
    pub fn health_check(mut self, enabled: bool) -> Self {
        self.health_check = enabled;
        self
    }

    /// Enables or disables the user listing endpoint (GET /api/users/)
    pub fn list_users(mut self, enabled: bool) -> Self {
        self.list_users = enabled;
        self
    }

    /// Enables or disables the user retrieval endpoint (GET /api/users/{user_id})
    pub fn get_user(mut self, enabled: bool) -> Self {
        self.get_user = enabled;
        self
    }

    /// Enables or disables the user creation endpoint (POST /api/users/)
    pub fn create_user(mut self, enabled: bool) -> Self {
        self.create_user = enabled;
        self
    }

    /// Enables or disables the user update endpoint (PUT /api/users/{user_id})
    pub fn update_user(mut self, enabled: bool) -> Self {
        self.update_user = enabled;
        self
    }

    /// Enables or disables the user deletion endpoint (DELETE /api/users/{user_id})
    pub fn delete_user(mut self, enabled: bool) -> Self {
        self.delete_user = enabled;
        self
    }

    /// Builds the Axum router with the configured routes
    ///
    /// The collection endpoints answer on both `/api/users` and `/api/users/`.
    /// Unmatched paths fall through to a JSON 404.
    pub fn build(self) -> Router<AppState> {
        let mut router = Router::new();

        if self.health_check {
            router = router.route("/health", axum::routing::get(health_check));
        }

        let mut collection: MethodRouter<AppState> = MethodRouter::new();
        if self.list_users {
            collection = collection.get(list_users);
        }
        if self.create_user {
            collection = collection.post(create_user);
        }
        if self.list_users || self.create_user {
            router = router
                .route(USERS_PATH, collection.clone())
                .route(&format!("{}/", USERS_PATH), collection);
        }

        let mut item: MethodRouter<AppState> = MethodRouter::new();
        if self.get_user {
            item = item.get(get_user);
        }
        if self.update_user {
            item = item.put(update_user);
        }
        if self.delete_user {
            item = item.delete(delete_user);
        }
        if self.get_user || self.update_user || self.delete_user {
            router = router.route(&format!("{}/{{user_id}}", USERS_PATH), item);
        }

        router.fallback(not_found)
    }
}

/// Creates all API routes
pub fn create_routes() -> Router<AppState> {
    RouterBuilder::with_all_routes().build()
}

/// Creates router with read-only functionality
pub fn create_readonly_routes() -> Router<AppState> {
    RouterBuilder::with_readonly_routes().build()
}

/// Creates router with minimal functionality (health check only)
pub fn create_minimal_routes() -> Router<AppState> {
    RouterBuilder::with_minimal_routes().build()
}

/// Assembles the full application: every route, shared state, tracing and CORS
pub fn create_app(config: &AppConfig, state: AppState) -> Router {
    create_routes().with_state(state).layer(
        ServiceBuilder::new()
            .layer(trace_layer())
            .layer(cors_layer(&config.server))
            .into_inner(),
    )
}
