//! Users API Server
//!
//! Loads configuration from the environment (and `.env` if present), wires the
//! user routes, health check, tracing and CORS, then serves until Ctrl-C.

use dotenv::dotenv;

use users_api::{
    api::{create_app, AppState, USERS_PATH},
    config::{env, AppConfig},
    service::UserService,
    utils::IntoAppError,
    APP_NAME, VERSION,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv().ok();

    let config = AppConfig::from_env();

    // RUST_LOG wins over LOG_LEVEL when both are set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.server.log_level.as_str()),
    )
    .init();

    log::info!("🚀 Starting {} v{}", APP_NAME, VERSION);
    if env::is_set("RUST_LOG") {
        log::debug!("Log filter taken from RUST_LOG");
    }

    config.validate()?;
    log::info!("✅ Configuration loaded and validated");

    let app_state = AppState::new(UserService::new());
    let app = create_app(&config, app_state);

    if config.server.allows_any_origin() {
        log::warn!("⚠️  CORS is open to every origin with credentials allowed");
    } else {
        log::info!("CORS origins: {}", config.server.cors_origins.join(", "));
    }

    log::info!("📋 API Endpoints:");
    log::info!("     GET    /health - Health check");
    log::info!("     GET    {}/ - List users", USERS_PATH);
    log::info!("     GET    {}/{{user_id}} - Get user", USERS_PATH);
    log::info!("     POST   {}/ - Create user", USERS_PATH);
    log::info!("     PUT    {}/{{user_id}} - Update user", USERS_PATH);
    log::info!("     DELETE {}/{{user_id}} - Delete user", USERS_PATH);

    let bind_addr = config.server.bind_addr();
    log::info!("🌐 Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .into_app_error(&format!("Failed to bind {}", bind_addr))?;
    log::info!("✅ Server listening and ready for requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, run until the process is killed
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received, draining connections");
}
