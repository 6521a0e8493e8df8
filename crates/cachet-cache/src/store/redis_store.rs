//! Redis-backed store handle.

use super::{expiry_millis, KeyValueStore};
use async_trait::async_trait;
use cachet_core::{CachetError, CachetResult};
use deadpool_redis::{Connection, Pool};
use redis::AsyncCommands;
use std::fmt;
use std::time::Duration;

/// A pooled session to the remote store.
///
/// Clones share the same pool, so one handle created at startup can be
/// handed to every caller.
#[derive(Clone)]
pub struct StoreHandle {
    pool: Pool,
    database: i64,
}

impl StoreHandle {
    /// Wraps an already built pool.
    ///
    /// Prefer [`connect`](crate::connect), which also runs the liveness probe.
    #[must_use]
    pub fn new(pool: Pool, database: i64) -> Self {
        Self { pool, database }
    }

    /// Logical database index selected by this handle.
    #[must_use]
    pub const fn database(&self) -> i64 {
        self.database
    }

    async fn conn(&self) -> CachetResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| CachetError::store(format!("Failed to get Redis connection: {}", e)))
    }
}

#[async_trait]
impl KeyValueStore for StoreHandle {
    async fn get(&self, key: &str) -> CachetResult<Option<Vec<u8>>> {
        let mut conn = self.conn().await?;
        conn.get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(|e| CachetError::store(format!("Failed to get key '{}': {}", key, e)))
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CachetResult<()> {
        let mut conn = self.conn().await?;
        let result = match ttl {
            Some(ttl) => conn.pset_ex::<_, _, ()>(key, value, expiry_millis(ttl)).await,
            None => conn.set::<_, _, ()>(key, value).await,
        };
        result.map_err(|e| CachetError::store(format!("Failed to set key '{}': {}", key, e)))
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.pool.status();
        f.debug_struct("StoreHandle")
            .field("database", &self.database)
            .field("size", &status.size)
            .field("available", &status.available)
            .finish()
    }
}
