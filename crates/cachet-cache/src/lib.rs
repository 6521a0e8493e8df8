//! # Cachet Cache
//!
//! Cache-aside primitives in front of Redis.
//!
//! [`connect`] produces a validated [`StoreHandle`] at startup, and
//! [`CacheClient`] wraps it to read and write typed records. Payloads go
//! through [`JsonCodec`], the only place that knows the wire format.

pub mod client;
pub mod codec;
pub mod connector;
pub mod keys;
pub mod record;
pub mod store;

pub use client::CacheClient;
pub use codec::JsonCodec;
pub use connector::{connect, verify_liveness, SENTINEL_KEY, SENTINEL_VALUE};
pub use keys::CacheKeys;
pub use record::Record;
pub use store::{KeyValueStore, StoreHandle};

#[cfg(any(test, feature = "test-util"))]
pub use store::MemoryStore;
