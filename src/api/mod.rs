//! API Layer
//!
//! HTTP API endpoints and request handling for the users API.

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use extract::AppJson;
pub use handlers::AppState;
pub use middleware::{cors_layer, trace_layer};
pub use routes::{
    create_app, create_minimal_routes, create_readonly_routes, create_routes, RouterBuilder,
    USERS_PATH,
};
