//! Terminal "world renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout libraries and instead renders into a simple framebuffer that
//! is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw each map tile as one emoji, two terminal columns wide
//! - Only rewrite the cells that changed between frames

pub mod fb;
pub mod renderer;
pub mod world_view;

pub use shardwalk_core as core;
pub use shardwalk_types as types;

pub use fb::{char_width, str_width, Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use world_view::{group_thousands, AnchorY, Viewport, WorldView, AVATAR, LOG_ROWS, PANEL_WIDTH};
