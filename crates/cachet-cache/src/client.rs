//! Typed cache-aside client.

use crate::codec::JsonCodec;
use crate::store::{KeyValueStore, StoreHandle};
use cachet_core::CachetResult;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Per-key get/set against a shared store.
///
/// The client holds no state of its own besides the store reference, so it
/// is cheap to clone into every request handler. Concurrent misses on the
/// same key are not coalesced; the last write wins.
#[derive(Clone)]
pub struct CacheClient {
    store: Arc<dyn KeyValueStore>,
}

impl CacheClient {
    /// Creates a client over any store implementation.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Creates a client over a validated Redis handle.
    #[must_use]
    pub fn from_handle(handle: StoreHandle) -> Self {
        Self::new(Arc::new(handle))
    }

    /// Looks up `key` and decodes it into `T`.
    ///
    /// A miss is `Ok(None)`. A payload that does not decode into `T` is a
    /// serialization error, and a transport failure is a store error.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> CachetResult<Option<T>> {
        let Some(payload) = self.store.get(key).await? else {
            debug!(key, "Cache miss");
            return Ok(None);
        };

        let value = JsonCodec::decode(&payload)?;
        debug!(key, content = %String::from_utf8_lossy(&payload), "Cache hit");
        Ok(Some(value))
    }

    /// Looks up `key`, returning `T::default()` and `false` on a miss.
    pub async fn lookup<T: DeserializeOwned + Default>(&self, key: &str) -> CachetResult<(T, bool)> {
        Ok(match self.get(key).await? {
            Some(value) => (value, true),
            None => (T::default(), false),
        })
    }

    /// Encodes `value` and stores it under `key`, replacing any existing entry.
    ///
    /// A zero `ttl` stores the entry without expiration. Encoding failures
    /// are reported before the store is contacted.
    pub async fn set<T: Serialize + ?Sized>(
        &self,
        key: &str,
        ttl: Duration,
        value: &T,
    ) -> CachetResult<()> {
        let payload = JsonCodec::encode(value)?;
        let expiry = (!ttl.is_zero()).then_some(ttl);

        self.store.set(key, &payload, expiry).await?;

        debug!(key, ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX), "Cached key");
        Ok(())
    }
}

impl fmt::Debug for CacheClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheClient").finish_non_exhaustive()
    }
}
