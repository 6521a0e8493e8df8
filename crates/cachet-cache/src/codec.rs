//! JSON payload codec.

use cachet_core::{CachetError, CachetResult};
use serde::{de::DeserializeOwned, Serialize};

/// Converts values to and from the byte payloads stored under cache keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Encodes a value as a JSON payload.
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> CachetResult<Vec<u8>> {
        serde_json::to_vec(value)
            .map_err(|e| CachetError::serialization(format!("Failed to encode value: {}", e)))
    }

    /// Decodes a JSON payload into `T`.
    pub fn decode<T: DeserializeOwned>(payload: &[u8]) -> CachetResult<T> {
        serde_json::from_slice(payload)
            .map_err(|e| CachetError::serialization(format!("Failed to decode payload: {}", e)))
    }
}
