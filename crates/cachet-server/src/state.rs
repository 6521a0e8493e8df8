//! Application state for Axum handlers.

use cachet_cache::{CacheClient, CacheKeys};
use cachet_config::CacheConfig;
use std::time::Duration;

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub cache: CacheClient,
    pub keys: CacheKeys,
    pub default_ttl: Duration,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(cache: CacheClient, config: &CacheConfig) -> Self {
        Self {
            cache,
            keys: CacheKeys::new(config.key_prefix.clone()),
            default_ttl: config.default_ttl(),
        }
    }
}
