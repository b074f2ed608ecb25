//! Configuration types

use crate::error::{CacheError, CacheResult};
use std::time::Duration;

/// Connection configuration for the Redis store.
///
/// Defaults are applied here, before construction; the store constructor
/// takes this struct and never reads the environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisConfig {
    /// Store address, `host:port`.
    pub addr: String,
    /// Store credential; `None` means unauthenticated.
    pub password: Option<String>,
    /// Logical database index.
    pub db: i64,
    /// Bound on connection establishment and the liveness probe.
    pub connect_timeout: Duration,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            addr: "localhost:6379".to_string(),
            password: None,
            db: 0,
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl RedisConfig {
    /// Create from environment variables with fallback to defaults.
    ///
    /// Environment variables:
    /// - `REDIS_ADDR`: store address (default: `localhost:6379`)
    /// - `REDIS_PASSWORD`: store credential (default: none)
    /// - `REDIS_DB`: logical database index (default: 0)
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Config` if `REDIS_DB` is set to a non-integer
    /// value. A malformed index is a hard error, not a silent fallback.
    pub fn from_env() -> CacheResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CacheResult<Self> {
        let defaults = Self::default();

        let addr = lookup("REDIS_ADDR")
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.addr);

        let password = lookup("REDIS_PASSWORD").filter(|s| !s.is_empty());

        let db = match lookup("REDIS_DB").filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse::<i64>().map_err(|e| CacheError::Config {
                field: "REDIS_DB".to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.db,
        };

        Ok(Self {
            addr,
            password,
            db,
            connect_timeout: defaults.connect_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_contract() {
        let config = RedisConfig::default();
        assert_eq!(config.addr, "localhost:6379");
        assert_eq!(config.password, None);
        assert_eq!(config.db, 0);
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn unset_environment_yields_defaults() {
        let config = RedisConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RedisConfig::default());
    }

    #[test]
    fn environment_overrides_are_applied() {
        let config = RedisConfig::from_lookup(lookup_from(&[
            ("REDIS_ADDR", "redis.internal:6390"),
            ("REDIS_PASSWORD", "hunter2"),
            ("REDIS_DB", "3"),
        ]))
        .unwrap();

        assert_eq!(config.addr, "redis.internal:6390");
        assert_eq!(config.password.as_deref(), Some("hunter2"));
        assert_eq!(config.db, 3);
    }

    #[test]
    fn non_numeric_db_is_a_config_error() {
        let err = RedisConfig::from_lookup(lookup_from(&[("REDIS_DB", "not-a-number")]))
            .unwrap_err();
        assert!(matches!(err, CacheError::Config { ref field, .. } if field == "REDIS_DB"));
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = RedisConfig::from_lookup(lookup_from(&[
            ("REDIS_ADDR", ""),
            ("REDIS_PASSWORD", ""),
            ("REDIS_DB", ""),
        ]))
        .unwrap();
        assert_eq!(config, RedisConfig::default());
    }
}
