use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::core::config::DatabaseConfig;

/// Handle to the relational database.
///
/// Wraps an async MySQL connection pool; cloning is cheap and shares the
/// pool. The skeleton ships no schema of its own, so the surface is the
/// connection lifecycle plus a liveness probe. Queries come in with the
/// bot's actual features.
#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Connects to the configured database and verifies liveness.
    ///
    /// The pool is capped at 10 connections. A ping runs before the handle
    /// is returned so misconfiguration fails the process at startup rather
    /// than on the first handled update.
    ///
    /// # Errors
    /// Returns the underlying `sqlx::Error` if the pool cannot be built or
    /// the ping fails.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(10))
            .connect(&config.url())
            .await?;

        let db = Self { pool };
        db.ping().await?;
        Ok(db)
    }

    /// Round-trips a trivial query to check the connection is alive.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// The underlying pool, for feature code that runs its own queries.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Gracefully closes the pool, waiting for open connections to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
