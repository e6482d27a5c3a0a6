// src/shared/backend.rs
use deadpool_redis::{Config as RedisConfig, Pool, Runtime};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{0} is not set")]
    MissingVariable(&'static str),

    #[error("Database connection failed: {0}")]
    Database(#[from] DbErr),

    #[error("Redis pool creation failed: {0}")]
    Redis(String),
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub database_url: String,
    pub redis_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl BackendConfig {
    pub fn from_env() -> Result<Self, BackendError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| BackendError::MissingVariable("DATABASE_URL"))?;
        let redis_url =
            env::var("REDIS_URL").map_err(|_| BackendError::MissingVariable("REDIS_URL"))?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);
        let min_connections = env::var("DATABASE_MIN_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            redis_url,
            max_connections,
            min_connections,
        })
    }
}

/// Owns the database connection pool and the Redis pool.
///
/// Built once in `main` and handed to every adapter that needs a
/// connection. `shutdown` releases both pools.
#[derive(Clone)]
pub struct BackendClient {
    db: Arc<DatabaseConnection>,
    redis: Arc<Pool>,
}

impl BackendClient {
    pub async fn connect(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut opt = ConnectOptions::new(config.database_url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        let db = Database::connect(opt).await?;

        let redis = RedisConfig::from_url(&config.redis_url)
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| BackendError::Redis(e.to_string()))?;

        info!("Backend client connected");

        Ok(Self::from_parts(Arc::new(db), Arc::new(redis)))
    }

    pub fn from_parts(db: Arc<DatabaseConnection>, redis: Arc<Pool>) -> Self {
        Self { db, redis }
    }

    pub fn database(&self) -> Arc<DatabaseConnection> {
        Arc::clone(&self.db)
    }

    pub fn redis(&self) -> Arc<Pool> {
        Arc::clone(&self.redis)
    }

    pub async fn database_ready(&self) -> bool {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1",
            ))
            .await
            .is_ok()
    }

    pub async fn redis_ready(&self) -> bool {
        let mut conn = match self.redis.get().await {
            Ok(conn) => conn,
            Err(_) => return false,
        };

        deadpool_redis::redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .is_ok()
    }

    pub async fn shutdown(self) {
        self.redis.close();

        match Arc::try_unwrap(self.db) {
            Ok(db) => match db.close().await {
                Ok(()) => info!("Database pool closed"),
                Err(e) => warn!(error = %e, "Database pool did not close cleanly"),
            },
            Err(_) => warn!("Database pool still shared at shutdown, leaving it to drop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn unreachable_redis() -> Arc<Pool> {
        Arc::new(
            RedisConfig::from_url("redis://127.0.0.1:1")
                .create_pool(Some(Runtime::Tokio1))
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn database_ready_runs_probe_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let client = BackendClient::from_parts(Arc::new(db), unreachable_redis());
        assert!(client.database_ready().await);
    }

    #[tokio::test]
    async fn database_ready_is_false_when_probe_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".into())])
            .into_connection();

        let client = BackendClient::from_parts(Arc::new(db), unreachable_redis());
        assert!(!client.database_ready().await);
    }

    #[tokio::test]
    async fn redis_ready_is_false_when_server_unreachable() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let client = BackendClient::from_parts(Arc::new(db), unreachable_redis());

        assert!(!client.redis_ready().await);
    }

    #[test]
    fn config_requires_database_url() {
        std::env::remove_var("DATABASE_URL");
        let result = BackendConfig::from_env();
        assert!(matches!(
            result,
            Err(BackendError::MissingVariable("DATABASE_URL"))
        ));
    }
}
