//! In-memory key-value store.
//!
//! Backs local development and the test suite. Entries honor the TTL they
//! were written with, and the store records that TTL so tests can assert
//! what expiration a write carried.

use async_trait::async_trait;
use slackdir_core::{CacheError, CacheResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::traits::KvStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
    written_at: Instant,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.written_at.elapsed() >= self.ttl
    }
}

/// `KvStore` over a `HashMap`, for tests and local development.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
    closed: AtomicBool,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant a raw payload under a key, bypassing the accessor. Used by
    /// tests to simulate corrupt or foreign data at a derived key.
    pub async fn insert_raw(&self, key: &str, value: impl Into<String>) {
        self.entries.write().await.insert(
            key.to_string(),
            Entry {
                value: value.into(),
                ttl: Duration::from_secs(60),
                written_at: Instant::now(),
            },
        );
    }

    /// The TTL the most recent write to `key` carried, if any.
    pub async fn last_ttl(&self, key: &str) -> Option<Duration> {
        self.entries.read().await.get(key).map(|e| e.ttl)
    }

    /// Make every subsequent request fail with a storage error, simulating
    /// an unreachable store.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_usable(&self, key: &str) -> CacheResult<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(CacheError::Storage {
                key: key.to_string(),
                reason: "connection closed".to_string(),
            });
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(CacheError::Storage {
                key: key.to_string(),
                reason: "simulated store failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        self.check_usable(key)?;
        self.entries.write().await.insert(
            key.to_string(),
            Entry {
                value,
                ttl,
                written_at: Instant::now(),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.check_usable(key)?;
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone()))
    }

    async fn ping(&self, _timeout: Duration) -> CacheResult<()> {
        self.check_usable("ping")
    }

    async fn close(&self) -> CacheResult<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
