//! Error types for cache operations

use crate::entities::ResourceKind;
use thiserror::Error;

/// Result alias used throughout the cache crates.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache accessor errors.
///
/// A cache miss is NOT an error: reads report it through the lookup result,
/// so these variants only cover construction failures and genuine request
/// failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    /// Store unreachable or liveness probe failed at construction time.
    /// Fatal: the accessor is not usable.
    #[error("failed to connect to redis at {addr}: {reason}")]
    Connection { addr: String, reason: String },

    /// Malformed environment-sourced setting. Fatal to construction.
    #[error("invalid value for {field}: {value} - {reason}")]
    Config {
        field: String,
        value: String,
        reason: String,
    },

    /// A store request failed for a reason other than "key absent".
    #[error("store request failed for {key}: {reason}")]
    Storage { key: String, reason: String },

    /// Encode failure on a write, or a corrupt/foreign payload on a read.
    #[error("failed to {op} {kind} payload: {reason}")]
    Serialization {
        kind: ResourceKind,
        op: SerdeOp,
        reason: String,
    },
}

/// Which half of the serialization boundary failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerdeOp {
    Encode,
    Decode,
}

impl std::fmt::Display for SerdeOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerdeOp::Encode => f.write_str("encode"),
            SerdeOp::Decode => f.write_str("decode"),
        }
    }
}
