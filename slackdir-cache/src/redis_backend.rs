//! Redis-backed key-value store.
//!
//! Wraps a multiplexed async connection from the `redis` crate. Construction
//! verifies liveness with a bounded PING so an unreachable store fails fast
//! instead of hanging the first request.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use slackdir_core::{CacheError, CacheResult, RedisConfig};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::traits::KvStore;

/// Redis store client.
///
/// The connection handle lives behind a mutex holding an `Option` so that
/// `close` can drop it exactly once; a second `close` is a no-op and any
/// request after `close` reports a storage error.
#[derive(Debug)]
pub struct RedisStore {
    addr: String,
    conn: Mutex<Option<MultiplexedConnection>>,
}

impl RedisStore {
    /// Connect to Redis and verify liveness.
    ///
    /// Both connection establishment and the PING probe are bounded by
    /// `config.connect_timeout`.
    ///
    /// # Errors
    ///
    /// - `CacheError::Config` if the address is malformed.
    /// - `CacheError::Connection` if the store is unreachable or the probe
    ///   does not succeed within the timeout.
    pub async fn connect(config: &RedisConfig) -> CacheResult<Self> {
        let (host, port) = split_addr(&config.addr)?;

        let info = redis::ConnectionInfo {
            addr: redis::ConnectionAddr::Tcp(host, port),
            redis: redis::RedisConnectionInfo {
                db: config.db,
                password: config.password.clone(),
                ..Default::default()
            },
        };

        let client = redis::Client::open(info).map_err(|e| CacheError::Connection {
            addr: config.addr.clone(),
            reason: e.to_string(),
        })?;

        let mut conn = timeout(
            config.connect_timeout,
            client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| CacheError::Connection {
            addr: config.addr.clone(),
            reason: "connection attempt timed out".to_string(),
        })?
        .map_err(|e| CacheError::Connection {
            addr: config.addr.clone(),
            reason: e.to_string(),
        })?;

        let probe = timeout(config.connect_timeout, async {
            let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
            Ok::<_, redis::RedisError>(pong)
        })
        .await
        .map_err(|_| CacheError::Connection {
            addr: config.addr.clone(),
            reason: "liveness probe timed out".to_string(),
        })?;
        probe.map_err(|e| CacheError::Connection {
            addr: config.addr.clone(),
            reason: e.to_string(),
        })?;

        tracing::info!(addr = %config.addr, db = config.db, "connected to redis");

        Ok(Self {
            addr: config.addr.clone(),
            conn: Mutex::new(Some(conn)),
        })
    }

    /// The address this store was connected to.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    async fn connection(&self, key: &str) -> CacheResult<MultiplexedConnection> {
        // MultiplexedConnection is a cheap clone over a shared channel; the
        // lock only guards the close latch, never an in-flight request.
        self.conn
            .lock()
            .await
            .clone()
            .ok_or_else(|| CacheError::Storage {
                key: key.to_string(),
                reason: "connection closed".to_string(),
            })
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.connection(key).await?;
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(|e| CacheError::Storage {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection(key).await?;
        // redis nil decodes to None; only genuine failures become errors.
        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| CacheError::Storage {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }

    async fn ping(&self, deadline: Duration) -> CacheResult<()> {
        let mut conn = self.connection("ping").await?;
        let probe = timeout(deadline, async {
            let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
            Ok::<_, redis::RedisError>(pong)
        })
        .await
        .map_err(|_| CacheError::Connection {
            addr: self.addr.clone(),
            reason: "liveness probe timed out".to_string(),
        })?;
        probe.map(|_| ()).map_err(|e| CacheError::Connection {
            addr: self.addr.clone(),
            reason: e.to_string(),
        })
    }

    async fn close(&self) -> CacheResult<()> {
        // Dropping the last clone of the multiplexed connection tears down
        // the underlying socket; repeated close finds None and returns Ok.
        self.conn.lock().await.take();
        Ok(())
    }
}

/// Split `host:port` into its parts; a bare host defaults to port 6379.
fn split_addr(addr: &str) -> CacheResult<(String, u16)> {
    match addr.rsplit_once(':') {
        Some((host, port)) => {
            let port = port.parse::<u16>().map_err(|e| CacheError::Config {
                field: "REDIS_ADDR".to_string(),
                value: addr.to_string(),
                reason: e.to_string(),
            })?;
            Ok((host.to_string(), port))
        }
        None => Ok((addr.to_string(), 6379)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_addr_parses_host_and_port() {
        assert_eq!(
            split_addr("localhost:6379").unwrap(),
            ("localhost".to_string(), 6379)
        );
        assert_eq!(
            split_addr("redis.internal:6390").unwrap(),
            ("redis.internal".to_string(), 6390)
        );
    }

    #[test]
    fn split_addr_defaults_port() {
        assert_eq!(split_addr("localhost").unwrap(), ("localhost".to_string(), 6379));
    }

    #[test]
    fn split_addr_rejects_bad_port() {
        let err = split_addr("localhost:notaport").unwrap_err();
        assert!(matches!(err, CacheError::Config { ref field, .. } if field == "REDIS_ADDR"));
    }

    #[tokio::test]
    async fn connect_to_unreachable_store_fails_fast() {
        let config = RedisConfig {
            // Reserved TEST-NET-1 address, nothing listens there.
            addr: "192.0.2.1:6379".to_string(),
            connect_timeout: Duration::from_millis(200),
            ..RedisConfig::default()
        };

        let err = RedisStore::connect(&config).await.unwrap_err();
        assert!(matches!(err, CacheError::Connection { .. }));
    }
}
