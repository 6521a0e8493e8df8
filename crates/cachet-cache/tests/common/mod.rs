//! Common test infrastructure for Redis integration tests.

use cachet_cache::{connect, StoreHandle};
use cachet_config::RedisConfig;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::redis::{Redis, REDIS_PORT};

/// Test Redis container wrapper.
///
/// Keeps the container alive for as long as the handle is in use.
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    settings: RedisConfig,
}

impl TestRedis {
    /// Starts a fresh Redis container.
    pub async fn new() -> Self {
        let container = Redis::default()
            .start()
            .await
            .expect("Failed to start Redis container");

        let port = container
            .get_host_port_ipv4(REDIS_PORT)
            .await
            .expect("Failed to get Redis port");

        let settings = RedisConfig {
            host: "127.0.0.1".to_string(),
            port,
            database: 1,
            pool_size: 4,
            ..RedisConfig::default()
        };

        Self {
            _container: container,
            settings,
        }
    }

    /// Connection settings pointing at the container.
    pub fn settings(&self) -> &RedisConfig {
        &self.settings
    }

    /// Connects through the production connector.
    pub async fn connect(&self) -> StoreHandle {
        connect(&self.settings).await.expect("Failed to connect to Redis")
    }
}
