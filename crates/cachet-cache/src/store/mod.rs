//! Key-value store seam.
//!
//! The cache client and the liveness probe talk to the store through
//! [`KeyValueStore`]; production code uses the Redis-backed [`StoreHandle`].

#[cfg(any(test, feature = "test-util"))]
mod memory;
mod redis_store;

#[cfg(any(test, feature = "test-util"))]
pub use memory::MemoryStore;
pub use redis_store::StoreHandle;

use async_trait::async_trait;
use cachet_core::CachetResult;
use std::time::Duration;

/// Single-key read/write primitives against the remote store.
///
/// Implementations must be safe to share between concurrent callers.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the payload stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get(&self, key: &str) -> CachetResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, replacing any existing entry.
    ///
    /// `None` means the entry never expires.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CachetResult<()>;
}

/// Converts a TTL to whole milliseconds, rounding positive sub-millisecond values up.
#[must_use]
pub fn expiry_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_millis() {
        assert_eq!(expiry_millis(Duration::from_secs(60)), 60_000);
        assert_eq!(expiry_millis(Duration::from_micros(10)), 1);
        assert_eq!(expiry_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(expiry_millis(Duration::MAX), u64::MAX);
    }
}
