//! slackdir Test Utilities
//!
//! Centralized test infrastructure for the slackdir workspace:
//! - Fixtures for common directory scenarios
//! - Proptest generators for entity types

// Re-export core types for convenience
pub use slackdir_core::{ResourceKind, SlackChannel, SlackUser, UserProfile};

use proptest::prelude::*;

// ============================================================================
// FIXTURES
// ============================================================================

/// Build a user record with the given id, handle, and real name.
pub fn make_user(id: &str, name: &str, real_name: &str) -> SlackUser {
    SlackUser {
        id: id.to_string(),
        name: name.to_string(),
        profile: UserProfile {
            real_name: real_name.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Build a public channel record.
pub fn make_channel(id: &str, name: &str, topic: &str, purpose: &str, members: i64) -> SlackChannel {
    SlackChannel {
        id: id.to_string(),
        name: name.to_string(),
        topic: topic.to_string(),
        purpose: purpose.to_string(),
        member_count: members,
        ..Default::default()
    }
}

/// The two-user directory used across the test suite.
pub fn test_users() -> Vec<SlackUser> {
    vec![
        make_user("U123", "testuser1", "Test User 1"),
        make_user("U456", "testuser2", "Test User 2"),
    ]
}

/// The two-channel directory used across the test suite.
pub fn test_channels() -> Vec<SlackChannel> {
    vec![
        make_channel(
            "C123",
            "#general",
            "General discussion",
            "Company-wide announcements",
            100,
        ),
        make_channel(
            "C456",
            "#random",
            "Random chat",
            "Non-work related discussions",
            50,
        ),
    ]
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

/// Strategy for Slack-shaped identifiers.
pub fn id_strategy(prefix: &'static str) -> impl Strategy<Value = String> {
    "[A-Z0-9]{6,10}".prop_map(move |tail| format!("{prefix}{tail}"))
}

/// Strategy for arbitrary user records.
pub fn user_strategy() -> impl Strategy<Value = SlackUser> {
    (id_strategy("U"), "[a-z]{3,12}", "[A-Za-z ]{3,24}")
        .prop_map(|(id, name, real_name)| make_user(&id, &name, &real_name))
}

/// Strategy for arbitrary channel records, covering the visibility flags.
pub fn channel_strategy() -> impl Strategy<Value = SlackChannel> {
    (
        id_strategy("C"),
        "[a-z-]{3,20}",
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        0..10_000i64,
    )
        .prop_map(|(id, name, is_im, is_mpim, is_private, members)| SlackChannel {
            id,
            name,
            member_count: members,
            is_im,
            is_mpim,
            is_private,
            ..Default::default()
        })
}
