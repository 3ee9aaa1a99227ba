//! Users API Library
//!
//! HTTP scaffold for a user CRUD service. The route layer, service layer and
//! bootstrap are all in place; the service has no user store behind it yet,
//! so listings are empty, lookups report "User not found", creation answers
//! `501 Not Implemented` and deletes succeed without removing anything.
//!
//! # Endpoints
//!
//! | Method | Path | Today |
//! |---|---|---|
//! | GET | `/api/users/` | `200 []` |
//! | GET | `/api/users/{user_id}` | `404 User not found` |
//! | POST | `/api/users/` | `501` (`422` on invalid payload) |
//! | PUT | `/api/users/{user_id}` | `404` (`422` on invalid payload) |
//! | DELETE | `/api/users/{user_id}` | `204` (no body) |
//! | GET | `/health` | `200 {"status": "ok", "version": "1.0.0"}` |
//!
//! # As a Web Server Library
//!
//! ```rust,no_run
//! use users_api::{api::{create_app, AppState}, config::AppConfig, service::UserService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env();
//!     config.validate()?;
//!
//!     let app = create_app(&config, AppState::new(UserService::new()));
//!
//!     let listener = tokio::net::TcpListener::bind(config.server.bind_addr()).await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Router Builder Examples
//!
//! ```rust,no_run
//! use users_api::api::RouterBuilder;
//!
//! // Read-only user directory
//! let directory_router = RouterBuilder::with_readonly_routes().build();
//!
//! // Monitoring only
//! let health_router = RouterBuilder::new().health_check(true).build();
//! ```

/// HTTP API layer with handlers, middleware and configurable routing
pub mod api;

/// Configuration read from the environment
pub mod config;

/// Data models and request/response structures
pub mod models;

/// User management service
pub mod service;

/// Shared utilities for validation and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_app, create_routes, AppState, RouterBuilder};
pub use config::{AppConfig, ServerConfig};
pub use models::{HealthCheckResponse, User, UserCreate, UserUpdate};
pub use service::UserService;
pub use utils::error::{AppError, AppResult, ErrorResponse};

/// Library version from Cargo.toml, reported by `/health`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human readable application name used in startup logs
pub const APP_NAME: &str = "Users API";
