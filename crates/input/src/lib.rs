//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`]. Play is turn-based, so there is
//! no auto-repeat handling: one key press is one action.

pub mod map;

pub use shardwalk_types as types;

pub use map::{handle_key_event, should_quit};
