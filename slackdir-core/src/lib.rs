//! slackdir Core - Entity Types
//!
//! Pure data structures with no behavior. All other crates depend on this.
//! This crate contains ONLY data types, error enums, and configuration -
//! no I/O and no business logic.

pub mod config;
pub mod entities;
pub mod error;

pub use config::RedisConfig;
pub use entities::{ResourceKind, SlackChannel, SlackUser, UserProfile};
pub use error::{CacheError, CacheResult, SerdeOp};
