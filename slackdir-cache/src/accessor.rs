//! The scoped cache accessor.
//!
//! One accessor instance is bound to exactly one [`CacheScope`] for its
//! lifetime and exposes the four read/write operations plus close. All
//! payloads travel as JSON; the accessor never inspects record contents.

use serde::de::DeserializeOwned;
use serde::Serialize;
use slackdir_core::{
    CacheError, CacheResult, RedisConfig, ResourceKind, SerdeOp, SlackChannel, SlackUser,
};
use std::time::Duration;
use tracing::info;

use crate::lookup::CacheLookup;
use crate::redis_backend::RedisStore;
use crate::scope_key::{CacheScope, ScopedKey};
use crate::traits::KvStore;

/// Fixed expiration attached to every write. Not configurable per call.
pub const ENTRY_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Tenant-scoped accessor for the two directory collections.
///
/// Holds no mutable state beyond the store handle; concurrent calls on one
/// instance are safe, and two concurrent writes to the same key race at the
/// store under last-write-wins.
pub struct DirectoryCache<S: KvStore> {
    store: S,
    scope: CacheScope,
}

impl DirectoryCache<RedisStore> {
    /// Connect to Redis and bind the accessor to `scope`.
    ///
    /// Fails fast with a `Connection` error if the store's liveness probe
    /// does not succeed within the configured timeout.
    pub async fn connect(config: &RedisConfig, scope: CacheScope) -> CacheResult<Self> {
        let store = RedisStore::connect(config).await?;
        Ok(Self::new(store, scope))
    }
}

impl<S: KvStore> DirectoryCache<S> {
    /// Bind an accessor to a scope over an already-constructed store.
    pub fn new(store: S, scope: CacheScope) -> Self {
        Self { store, scope }
    }

    /// The scope this accessor is bound to.
    pub fn scope(&self) -> &CacheScope {
        &self.scope
    }

    /// Cache the user collection for this scope, fully replacing any prior
    /// value.
    pub async fn set_users(&self, users: &[SlackUser]) -> CacheResult<()> {
        self.set_collection(ResourceKind::Users, users).await?;
        info!(
            instance_id = %self.scope.instance_id(),
            user_id = %self.scope.user_id(),
            count = users.len(),
            "cached users"
        );
        Ok(())
    }

    /// Read the cached user collection for this scope.
    ///
    /// `Absent` means the key does not exist; a stored empty collection
    /// comes back as `Found` of an empty vec.
    pub async fn get_users(&self) -> CacheResult<CacheLookup<Vec<SlackUser>>> {
        let lookup = self.get_collection::<SlackUser>(ResourceKind::Users).await?;
        if let CacheLookup::Found(users) = &lookup {
            info!(
                instance_id = %self.scope.instance_id(),
                user_id = %self.scope.user_id(),
                count = users.len(),
                "loaded users from cache"
            );
        }
        Ok(lookup)
    }

    /// Cache the channel collection for this scope, fully replacing any
    /// prior value. Independent of the users entry.
    pub async fn set_channels(&self, channels: &[SlackChannel]) -> CacheResult<()> {
        self.set_collection(ResourceKind::Channels, channels).await?;
        info!(
            instance_id = %self.scope.instance_id(),
            user_id = %self.scope.user_id(),
            count = channels.len(),
            "cached channels"
        );
        Ok(())
    }

    /// Read the cached channel collection for this scope.
    pub async fn get_channels(&self) -> CacheResult<CacheLookup<Vec<SlackChannel>>> {
        let lookup = self
            .get_collection::<SlackChannel>(ResourceKind::Channels)
            .await?;
        if let CacheLookup::Found(channels) = &lookup {
            info!(
                instance_id = %self.scope.instance_id(),
                user_id = %self.scope.user_id(),
                count = channels.len(),
                "loaded channels from cache"
            );
        }
        Ok(lookup)
    }

    /// Release the store connection. Forwards the store client's own close
    /// idempotence; accessor state stays valid either way.
    pub async fn close(&self) -> CacheResult<()> {
        self.store.close().await
    }

    async fn set_collection<T: Serialize>(
        &self,
        kind: ResourceKind,
        items: &[T],
    ) -> CacheResult<()> {
        let key = ScopedKey::new(&self.scope, kind);
        let payload = serde_json::to_string(items).map_err(|e| CacheError::Serialization {
            kind,
            op: SerdeOp::Encode,
            reason: e.to_string(),
        })?;
        self.store.set(&key.render(), payload, ENTRY_TTL).await
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
    ) -> CacheResult<CacheLookup<Vec<T>>> {
        let key = ScopedKey::new(&self.scope, kind);
        match self.store.get(&key.render()).await? {
            None => Ok(CacheLookup::Absent),
            Some(payload) => {
                let items = serde_json::from_str(&payload).map_err(|e| {
                    CacheError::Serialization {
                        kind,
                        op: SerdeOp::Decode,
                        reason: e.to_string(),
                    }
                })?;
                Ok(CacheLookup::Found(items))
            }
        }
    }
}
