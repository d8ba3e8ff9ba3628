//! Supervisor service configuration.

use std::env;

use common::DatabaseConfig;

/// Supervisor service configuration.
#[derive(Debug, Clone, Default)]
pub struct SupervisorServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl SupervisorServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables from a `.env` file are picked up if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = DatabaseConfig::default();

        Self {
            database: DatabaseConfig {
                url: env::var("SUPERVISOR_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }
}
