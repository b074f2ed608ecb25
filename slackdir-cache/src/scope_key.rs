//! Tenant-scoped cache key system for multi-workspace isolation.
//!
//! The key insight is that `ScopedKey`'s private constructor makes
//! cross-tenant access UNCOMPILABLE. You cannot derive a key without
//! explicitly providing a scope.

use slackdir_core::ResourceKind;

/// Prefix shared by every key this component writes.
const KEY_PREFIX: &str = "slack:";

/// The cache partition an accessor is bound to.
///
/// Composed of the workspace instance identifier and the requesting user's
/// identifier. Two distinct scopes never read or write each other's data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheScope {
    instance_id: String,
    user_id: String,
}

impl CacheScope {
    /// Create a scope from an instance identifier and a user identifier.
    pub fn new(instance_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            user_id: user_id.into(),
        }
    }

    /// Create a scope for a workspace that may belong to an enterprise grid.
    ///
    /// When `enterprise_id` is present it substitutes for the plain team
    /// identifier, so workspaces grouped under one enterprise share a single
    /// cache partition.
    pub fn for_workspace(
        team_id: &str,
        enterprise_id: Option<&str>,
        user_id: impl Into<String>,
    ) -> Self {
        let instance_id = enterprise_id.filter(|e| !e.is_empty()).unwrap_or(team_id);
        Self::new(instance_id, user_id)
    }

    /// The workspace (or enterprise) identifier.
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// The requesting user's identifier.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// A cache key derived from a scope and a resource kind.
///
/// # Design
///
/// The private inner struct ensures that a `ScopedKey` can ONLY be
/// constructed via [`ScopedKey::new`], which requires a [`CacheScope`].
/// There is no way to hand the store a key for another tenant's partition.
///
/// # Wire Format
///
/// The key renders as:
///
/// ```text
/// slack:{instance_id}/{user_id}:{resource}
/// ```
///
/// where `resource` is the literal `users` or `channels`. This format is
/// wire-visible and must match exactly for interoperability with existing
/// cached data. Derivation is a pure function: the same scope and kind
/// always render the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopedKey {
    inner: ScopedKeyInner,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScopedKeyInner {
    scope: CacheScope,
    kind: ResourceKind,
}

impl ScopedKey {
    /// Derive the key for a scope and resource kind.
    pub fn new(scope: &CacheScope, kind: ResourceKind) -> Self {
        Self {
            inner: ScopedKeyInner {
                scope: scope.clone(),
                kind,
            },
        }
    }

    /// The scope this key is bound to.
    pub fn scope(&self) -> &CacheScope {
        &self.inner.scope
    }

    /// The resource kind this key addresses.
    pub fn kind(&self) -> ResourceKind {
        self.inner.kind
    }

    /// Render the wire-visible key string.
    pub fn render(&self) -> String {
        format!(
            "{}{}/{}:{}",
            KEY_PREFIX,
            self.inner.scope.instance_id,
            self.inner.scope.user_id,
            self.inner.kind.as_str()
        )
    }
}

impl std::fmt::Display for ScopedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matches_wire_format() {
        let scope = CacheScope::new("TEST123", "U123456");
        let key = ScopedKey::new(&scope, ResourceKind::Users);
        assert_eq!(key.render(), "slack:TEST123/U123456:users");

        let key = ScopedKey::new(&scope, ResourceKind::Channels);
        assert_eq!(key.render(), "slack:TEST123/U123456:channels");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let scope = CacheScope::new("E0160NTJ2PM", "U1234567890");
        let first = ScopedKey::new(&scope, ResourceKind::Users).render();
        let second = ScopedKey::new(&scope, ResourceKind::Users).render();
        assert_eq!(first, second);
    }

    #[test]
    fn test_kinds_never_share_a_key() {
        let scope = CacheScope::new("TEST123", "U123456");
        let users = ScopedKey::new(&scope, ResourceKind::Users);
        let channels = ScopedKey::new(&scope, ResourceKind::Channels);
        assert_ne!(users.render(), channels.render());
    }

    #[test]
    fn test_different_instances_different_keys() {
        let enterprise = CacheScope::new("E0160NTJ2PM", "U1234567890");
        let standalone = CacheScope::new("TEAM123", "U9876543210");

        let key1 = ScopedKey::new(&enterprise, ResourceKind::Users);
        let key2 = ScopedKey::new(&standalone, ResourceKind::Users);
        assert_ne!(key1.render(), key2.render());
    }

    #[test]
    fn test_shared_instance_distinct_users() {
        let key1 = ScopedKey::new(&CacheScope::new("TEAM1", "U1"), ResourceKind::Users);
        let key2 = ScopedKey::new(&CacheScope::new("TEAM1", "U2"), ResourceKind::Users);
        assert_ne!(key1.render(), key2.render());
    }

    #[test]
    fn test_shared_user_distinct_instances() {
        let key1 = ScopedKey::new(&CacheScope::new("TEAM1", "U1"), ResourceKind::Channels);
        let key2 = ScopedKey::new(&CacheScope::new("TEAM2", "U1"), ResourceKind::Channels);
        assert_ne!(key1.render(), key2.render());
    }

    #[test]
    fn test_for_workspace_prefers_enterprise_id() {
        let grouped = CacheScope::for_workspace("T123", Some("E999"), "U1");
        assert_eq!(grouped.instance_id(), "E999");

        let standalone = CacheScope::for_workspace("T123", None, "U1");
        assert_eq!(standalone.instance_id(), "T123");

        let empty = CacheScope::for_workspace("T123", Some(""), "U1");
        assert_eq!(empty.instance_id(), "T123");
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for Slack-shaped identifiers (uppercase alphanumeric).
    fn id_strategy() -> impl Strategy<Value = String> {
        "[A-Z0-9]{1,16}"
    }

    fn kind_strategy() -> impl Strategy<Value = ResourceKind> {
        prop_oneof![Just(ResourceKind::Users), Just(ResourceKind::Channels)]
    }

    proptest! {
        /// Same scope and kind always render the same key.
        #[test]
        fn prop_render_is_pure(
            instance in id_strategy(),
            user in id_strategy(),
            kind in kind_strategy(),
        ) {
            let scope = CacheScope::new(instance, user);
            let a = ScopedKey::new(&scope, kind).render();
            let b = ScopedKey::new(&scope, kind).render();
            prop_assert_eq!(a, b);
        }

        /// Distinct (instance, user, kind) triples never collide.
        #[test]
        fn prop_derivation_is_injective(
            instance1 in id_strategy(),
            instance2 in id_strategy(),
            user1 in id_strategy(),
            user2 in id_strategy(),
            kind1 in kind_strategy(),
            kind2 in kind_strategy(),
        ) {
            let key1 = ScopedKey::new(&CacheScope::new(instance1, user1), kind1);
            let key2 = ScopedKey::new(&CacheScope::new(instance2, user2), kind2);

            if key1 == key2 {
                prop_assert_eq!(key1.render(), key2.render());
            } else {
                prop_assert_ne!(key1.render(), key2.render());
            }
        }

        /// Every rendered key carries the shared prefix and the kind suffix.
        #[test]
        fn prop_render_shape(
            instance in id_strategy(),
            user in id_strategy(),
            kind in kind_strategy(),
        ) {
            let scope = CacheScope::new(instance, user);
            let rendered = ScopedKey::new(&scope, kind).render();
            prop_assert!(rendered.starts_with("slack:"));
            let suffix = format!(":{}", kind.as_str());
            prop_assert!(rendered.ends_with(&suffix));
        }
    }
}
