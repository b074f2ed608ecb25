//! Directory entity types for the Slack integration.
//!
//! These records are treated as opaque serializable payloads by the cache:
//! field contents are never inspected or validated, and unknown fields
//! survive an encode/decode round-trip via the flattened `extra` maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resource kind discriminator for the two cached collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Users,
    Channels,
}

impl ResourceKind {
    /// Wire-visible key segment for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Users => "users",
            ResourceKind::Channels => "channels",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile block nested inside a user record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub real_name: String,
    /// Profile fields this component does not model, passed through opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A directory user record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackUser {
    pub id: String,
    pub name: String,
    pub profile: UserProfile,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A channel record, covering public channels, private groups, DMs and MPDMs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackChannel {
    pub id: String,
    pub name: String,
    pub topic: String,
    pub purpose: String,
    pub member_count: i64,
    pub is_im: bool,
    pub is_mpim: bool,
    pub is_private: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_kind_wire_tokens() {
        assert_eq!(ResourceKind::Users.as_str(), "users");
        assert_eq!(ResourceKind::Channels.as_str(), "channels");
    }

    #[test]
    fn user_roundtrip_preserves_unknown_fields() {
        let raw = serde_json::json!({
            "id": "U123",
            "name": "testuser1",
            "tz": "Europe/Amsterdam",
            "profile": {
                "real_name": "Test User 1",
                "status_emoji": ":wave:"
            }
        });

        let user: SlackUser = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.id, "U123");
        assert_eq!(user.profile.real_name, "Test User 1");
        assert_eq!(user.extra["tz"], "Europe/Amsterdam");
        assert_eq!(user.profile.extra["status_emoji"], ":wave:");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn channel_decode_tolerates_missing_fields() {
        let channel: SlackChannel = serde_json::from_str(r##"{"id":"C123","name":"#general"}"##).unwrap();
        assert_eq!(channel.id, "C123");
        assert_eq!(channel.member_count, 0);
        assert!(!channel.is_private);
    }
}
