//! Configuration Module
//!
//! Centralized configuration for the users API, read from the process
//! environment (after `.env` has been loaded by the binary).

use axum::http::HeaderValue;

use crate::utils::error::AppError;

/// Environment variable helpers
pub mod env {
    use std::env;

    /// Get environment variable as string with default
    pub fn get_string(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Get environment variable as u16 with default
    pub fn get_u16(key: &str, default: u16) -> u16 {
        env::var(key)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Get environment variable as a comma separated list with default
    pub fn get_list(key: &str, default: &str) -> Vec<String> {
        get_string(key, default)
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Check if environment variable is set
    pub fn is_set(key: &str) -> bool {
        env::var(key).is_ok()
    }
}

/// Default listening port when `PORT` is not set
pub const DEFAULT_PORT: u16 = 8000;

/// Default bind address when `HOST` is not set
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// Allowed CORS origins; `*` opens the API to every origin
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Load server configuration from `HOST`, `PORT`, `LOG_LEVEL` and `CORS_ORIGINS`
    pub fn from_env() -> Self {
        Self {
            host: env::get_string("HOST", DEFAULT_HOST),
            port: env::get_u16("PORT", DEFAULT_PORT),
            log_level: env::get_string("LOG_LEVEL", "info"),
            cors_origins: env::get_list("CORS_ORIGINS", "*"),
        }
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether CORS is open to any origin
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

impl AppConfig {
    /// Load complete application configuration from environment
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
        }
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> Result<(), AppError> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.host.trim().is_empty() {
            return Err(AppError::Configuration(
                "Server host cannot be empty".to_string(),
            ));
        }

        if !self.server.allows_any_origin() {
            for origin in &self.server.cors_origins {
                HeaderValue::from_str(origin).map_err(|_| {
                    AppError::Configuration(format!("Invalid CORS origin: {}", origin))
                })?;
            }
        }

        Ok(())
    }
}
