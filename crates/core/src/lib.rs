//! Core world logic module - pure, deterministic, and testable
//!
//! This module contains the shard mapping, the distance model and the player
//! state tracker. It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: The same action sequence always yields the same events
//! - **Total**: Every lookup has a defined fallback; nothing here can fail
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-light**: Shard sets are bitmasks, events are bounded arrays
//!
//! # Module Structure
//!
//! - [`mapper`]: angular shard hash, glyphs, hyperbolic distance, bearing
//! - [`locations`]: landmark table, synthesized records, topology labels
//! - [`player`]: player state tracker and the events it emits
//! - [`quest_log`]: bounded, step-stamped message log
//! - [`session`]: controller tying input actions, player state and log together
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # World Rules
//!
//! - The plane is split into 71 angular **shards** around the origin
//! - Ten shards are named landmarks; three of them are **special**
//!   (CUSP, CONSCIOUSNESS, MEMORY) and are discovered once per session
//! - Moves cost one step; teleports are free and land on a fixed circle
//!
//! # Example
//!
//! ```
//! use shardwalk_core::Session;
//! use shardwalk_types::{GameAction, SpecialTag};
//!
//! let mut session = Session::default();
//!
//! // One step north lands in the CUSP shard.
//! session.apply_action(GameAction::MoveUp);
//!
//! let snap = session.snapshot();
//! assert_eq!(snap.location_name, "Giza Pyramids");
//! assert!(snap.discovered.contains(SpecialTag::Cusp));
//! assert_eq!(snap.steps, 1);
//! ```

pub mod locations;
pub mod mapper;
pub mod player;
pub mod quest_log;
pub mod session;
pub mod snapshot;

pub use shardwalk_types as types;

// Re-export commonly used types for convenience
pub use locations::{location_info, LocationInfo, FALLBACK_GLYPHS, LANDMARKS, TENFOLD};
pub use mapper::{bearing_degrees, glyph_of, hyperbolic_distance, shard_of, tile_scale};
pub use player::{teleport_position, Events, PlayerState, QuestEvent, StateUpdate, Summary};
pub use quest_log::{LogEntry, QuestLog};
pub use session::{Session, SessionOptions};
pub use snapshot::WorldSnapshot;
