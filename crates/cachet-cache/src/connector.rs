//! Startup connection and liveness probe.

use crate::store::{KeyValueStore, StoreHandle};
use cachet_config::RedisConfig;
use cachet_core::{CachetError, CachetResult, ProbeStage};
use deadpool_redis::{Config, Runtime};
use tracing::{error, info};

/// Key written and read back by the liveness probe.
pub const SENTINEL_KEY: &str = "alive";

/// Value the liveness probe expects to read back.
pub const SENTINEL_VALUE: &str = "1";

/// Builds a pooled handle from connection settings and verifies it.
///
/// Any error returned here is fatal: the caller should stop before serving
/// traffic. Nothing is retried.
pub async fn connect(settings: &RedisConfig) -> CachetResult<StoreHandle> {
    info!(host = %settings.host, port = settings.port, "Connecting to Redis");

    let timeout = Some(settings.connect_timeout());
    let pool = Config::from_url(settings.url()?)
        .builder()
        .map_err(|e| CachetError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(settings.pool_size)
        .wait_timeout(timeout)
        .create_timeout(timeout)
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| CachetError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

    let handle = StoreHandle::new(pool, settings.database);
    verify_liveness(&handle).await?;

    info!(db = settings.database, "Redis connection verified");
    Ok(handle)
}

/// Writes the sentinel without expiry and checks that it reads back unchanged.
pub async fn verify_liveness(store: &dyn KeyValueStore) -> CachetResult<()> {
    store
        .set(SENTINEL_KEY, SENTINEL_VALUE.as_bytes(), None)
        .await
        .map_err(|e| probe_failed(ProbeStage::Write, &e))?;

    let observed = store
        .get(SENTINEL_KEY)
        .await
        .map_err(|e| probe_failed(ProbeStage::Read, &e))?;

    match observed {
        Some(value) if value == SENTINEL_VALUE.as_bytes() => Ok(()),
        other => {
            let observed = other.map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
            error!(
                key = SENTINEL_KEY,
                expected = SENTINEL_VALUE,
                observed = ?observed,
                "Liveness probe read back an unexpected value"
            );
            Err(CachetError::ProbeMismatch {
                key: SENTINEL_KEY.to_string(),
                expected: SENTINEL_VALUE.to_string(),
                observed,
            })
        }
    }
}

fn probe_failed(stage: ProbeStage, cause: &CachetError) -> CachetError {
    error!(%stage, error = %cause, "Liveness probe could not reach the store");
    CachetError::ProbeFailed {
        stage,
        message: cause.to_string(),
    }
}
