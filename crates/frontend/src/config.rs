//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Database connection parameters.
///
/// Reads from environment variables:
/// - `DB_HOST` — database host
/// - `DB_PORT` — database port (default: `1433`)
/// - `DB_USER` — username
/// - `DB_PASSWORD` — password
/// - `DB_NAME` — database name
///
/// Missing variables are stored as absent rather than rejected here;
/// a missing host surfaces as a pool-creation failure on the first
/// health request, not as a startup failure.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: Option<String>,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub min_connections: u32,
    pub max_connections: u32,
    pub idle_timeout: Duration,
}

impl DbConfig {
    /// Loads connection parameters from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("DB_HOST").ok(),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(1433),
            user: std::env::var("DB_USER").ok(),
            password: std::env::var("DB_PASSWORD").ok(),
            database: std::env::var("DB_NAME").ok(),
            ..Self::default()
        }
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: 1433,
            user: None,
            password: None,
            database: None,
            min_connections: 0,
            max_connections: 10,
            idle_timeout: Duration::from_millis(30_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_addr_formatting() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_db_default_values() {
        let config = DbConfig::default();
        assert_eq!(config.host, None);
        assert_eq!(config.port, 1433);
        assert_eq!(config.min_connections, 0);
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.idle_timeout, Duration::from_millis(30_000));
    }
}
