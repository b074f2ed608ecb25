//! Tenant-scoped cache accessor for Slack directory data.
//!
//! This crate stores and retrieves two collections - directory users and
//! channels - in Redis, namespaced per workspace instance and per requesting
//! user, with a bounded time-to-live.
//!
//! # Tenant Isolation
//!
//! The [`ScopedKey`] type ensures that cache keys CANNOT be constructed
//! without providing a [`CacheScope`]. Cross-tenant reads and writes are
//! prevented structurally, not by a runtime check.
//!
//! # Miss vs. empty vs. error
//!
//! Reads return [`CacheLookup`], which keeps "the key does not exist" apart
//! from "an empty collection was stored" and from a failed request. Callers
//! deciding between trusting the cache and querying the origin system depend
//! on that distinction.
//!
//! # Example
//!
//! ```ignore
//! let scope = CacheScope::new("T0123456", "U0123456");
//! let cache = DirectoryCache::connect(&RedisConfig::from_env()?, scope).await?;
//!
//! cache.set_users(&users).await?;
//!
//! match cache.get_users().await? {
//!     CacheLookup::Found(users) => render(users),
//!     CacheLookup::Absent => refetch_from_slack().await?,
//! }
//! ```

pub mod accessor;
pub mod lookup;
pub mod memory;
pub mod redis_backend;
pub mod scope_key;
pub mod traits;

pub use accessor::{DirectoryCache, ENTRY_TTL};
pub use lookup::CacheLookup;
pub use memory::MemoryStore;
pub use redis_backend::RedisStore;
pub use scope_key::{CacheScope, ScopedKey};
pub use traits::KvStore;
