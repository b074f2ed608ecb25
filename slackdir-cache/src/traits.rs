//! Key-value store trait.
//!
//! Abstracts over the store backends (Redis in production, in-memory for
//! tests and local development). The accessor only ever speaks this
//! interface.

use async_trait::async_trait;
use slackdir_core::CacheResult;
use std::time::Duration;

/// Minimal key-value store surface consumed by the accessor.
///
/// # Absent vs. error
///
/// `get` returns `Ok(None)` for a missing key. Implementations must never
/// report a missing key as an `Err`; the accessor relies on that split to
/// produce an unambiguous cache-miss signal.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Write `value` under `key` with the given expiration.
    ///
    /// Fully replaces any prior value at that key.
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()>;

    /// Read the value at `key`, or `None` if the key does not exist.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Liveness check, bounded by `timeout`.
    async fn ping(&self, timeout: Duration) -> CacheResult<()>;

    /// Release the store connection. Calling it again is a no-op.
    async fn close(&self) -> CacheResult<()>;
}

// Accessors bound to different scopes can share one store handle.
#[async_trait]
impl<S: KvStore + ?Sized> KvStore for std::sync::Arc<S> {
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        (**self).set(key, value, ttl).await
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        (**self).get(key).await
    }

    async fn ping(&self, timeout: Duration) -> CacheResult<()> {
        (**self).ping(timeout).await
    }

    async fn close(&self) -> CacheResult<()> {
        (**self).close().await
    }
}
