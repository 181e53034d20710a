//! Lazily-initialized shared database connection pool.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use tokio::sync::OnceCell;

use crate::config::DbConfig;
use crate::error::DbError;

/// Owns the process-wide connection pool, created on the first call
/// and reused for the rest of the process lifetime.
pub struct PoolManager {
    config: DbConfig,
    pool: OnceCell<PgPool>,
}

impl PoolManager {
    /// Creates a pool manager. No connection is attempted here.
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Returns the shared pool, creating it on the first call.
    ///
    /// Concurrent first calls are serialized by the cell, so exactly one
    /// pool is ever retained. A creation failure is propagated and
    /// nothing is cached; the next call attempts creation again.
    pub async fn acquire(&self) -> Result<&PgPool, DbError> {
        self.pool
            .get_or_try_init(|| async {
                let options = self.connect_options()?;
                let pool = PgPoolOptions::new()
                    .min_connections(self.config.min_connections)
                    .max_connections(self.config.max_connections)
                    .idle_timeout(self.config.idle_timeout)
                    .connect_with(options)
                    .await?;

                tracing::info!("database connection pool created");
                Ok(pool)
            })
            .await
    }

    fn connect_options(&self) -> Result<PgConnectOptions, DbError> {
        let host = self
            .config
            .host
            .as_deref()
            .ok_or(DbError::MissingEnv("DB_HOST"))?;

        let mut options = PgConnectOptions::new()
            .host(host)
            .port(self.config.port)
            .ssl_mode(PgSslMode::Disable);

        if let Some(user) = &self.config.user {
            options = options.username(user);
        }
        if let Some(password) = &self.config.password {
            options = options.password(password);
        }
        if let Some(database) = &self.config.database {
            options = options.database(database);
        }

        Ok(options)
    }
}

/// Database liveness checks, behind a trait so handlers can be
/// exercised without a live server.
#[async_trait]
pub trait LivenessProbe: Send + Sync {
    /// Runs `SELECT 1` and returns the value from the single row.
    async fn ping(&self) -> Result<i32, DbError>;
}

#[async_trait]
impl LivenessProbe for PoolManager {
    async fn ping(&self) -> Result<i32, DbError> {
        let pool = self.acquire().await?;
        let value: i32 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn acquire_fails_without_host() {
        let manager = PoolManager::new(DbConfig::default());

        let err = manager.acquire().await.unwrap_err();
        assert!(matches!(err, DbError::MissingEnv("DB_HOST")));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn failed_creation_is_not_cached() {
        let manager = PoolManager::new(DbConfig::default());

        assert!(manager.acquire().await.is_err());
        // The cell stays empty after a failure, so the next call
        // attempts creation again and reports the same error.
        assert!(manager.acquire().await.is_err());
    }
}
