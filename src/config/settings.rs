//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DB_IDLE_TIMEOUT_SECS, DEFAULT_DB_MAX_CONNECTIONS,
    DEFAULT_DB_MAX_LIFETIME_SECS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_max_lifetime: Duration,
    pub db_idle_timeout: Duration,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("db_max_connections", &self.db_max_connections)
            .field("db_max_lifetime", &self.db_max_lifetime)
            .field("db_idle_timeout", &self.db_idle_timeout)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            db_max_lifetime: Duration::from_secs(DEFAULT_DB_MAX_LIFETIME_SECS),
            db_idle_timeout: Duration::from_secs(DEFAULT_DB_IDLE_TIMEOUT_SECS),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS")
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            db_max_lifetime: Duration::from_secs(
                parse_var("DB_MAX_LIFETIME_SECS").unwrap_or(DEFAULT_DB_MAX_LIFETIME_SECS),
            ),
            db_idle_timeout: Duration::from_secs(
                parse_var("DB_IDLE_TIMEOUT_SECS").unwrap_or(DEFAULT_DB_IDLE_TIMEOUT_SECS),
            ),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_pool_settings() {
        let config = Config::default();
        assert_eq!(config.server_port, 3001);
        assert_eq!(config.db_max_connections, 100);
        assert_eq!(config.db_max_lifetime, Duration::from_secs(10));
        assert_eq!(config.server_addr(), "0.0.0.0:3001");
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config::default();
        let debug = format!("{:?}", config);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("123456"));
    }
}
