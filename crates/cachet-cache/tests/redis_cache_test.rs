//! Integration tests for the Redis-backed cache client.
//!
//! These tests run against a real Redis server using testcontainers.
//! Requires Docker; run with `cargo test -- --ignored`.

mod common;

use cachet_cache::{CacheClient, KeyValueStore, Record, SENTINEL_KEY};
use cachet_config::RedisConfig;
use cachet_core::CachetError;
use common::TestRedis;
use std::time::Duration;

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_connect_leaves_sentinel() {
    let redis = TestRedis::new().await;
    let handle = redis.connect().await;

    assert_eq!(handle.database(), 1);
    let sentinel = handle.get(SENTINEL_KEY).await.expect("Query failed");
    assert_eq!(sentinel, Some(b"1".to_vec()));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_set_then_get() {
    let redis = TestRedis::new().await;
    let cache = CacheClient::from_handle(redis.connect().await);

    cache
        .set("session:42", Duration::from_secs(60), &Record::new("hello"))
        .await
        .expect("Failed to set");

    let (record, found) = cache.lookup::<Record>("session:42").await.expect("Failed to get");
    assert!(found);
    assert_eq!(record.content, "hello");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_miss_on_empty_store() {
    let redis = TestRedis::new().await;
    let cache = CacheClient::from_handle(redis.connect().await);

    let (record, found) = cache
        .lookup::<Record>("nonexistent:key")
        .await
        .expect("A miss must not be an error");
    assert!(!found);
    assert_eq!(record, Record::default());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_expiration() {
    let redis = TestRedis::new().await;
    let cache = CacheClient::from_handle(redis.connect().await);

    cache
        .set("short", Duration::from_millis(200), &Record::new("brief"))
        .await
        .expect("Failed to set");
    assert!(cache.get::<Record>("short").await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(cache.get::<Record>("short").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_overwrite() {
    let redis = TestRedis::new().await;
    let cache = CacheClient::from_handle(redis.connect().await);

    cache.set("k", Duration::from_secs(30), &Record::new("r1")).await.unwrap();
    cache.set("k", Duration::ZERO, &Record::new("r2")).await.unwrap();

    assert_eq!(cache.get::<Record>("k").await.unwrap(), Some(Record::new("r2")));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_corrupt_payload() {
    let redis = TestRedis::new().await;
    let handle = redis.connect().await;
    handle.set("raw", b"\x00\x01 not json", None).await.unwrap();

    let cache = CacheClient::from_handle(handle);
    let err = cache.get::<Record>("raw").await.unwrap_err();
    assert!(matches!(err, CachetError::Serialization(_)));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_wrong_password_is_fatal() {
    let redis = TestRedis::new().await;
    let settings = RedisConfig {
        password: Some("not-the-password".to_string()),
        ..redis.settings().clone()
    };

    let err = cachet_cache::connect(&settings).await.unwrap_err();
    assert!(err.is_fatal());
}
