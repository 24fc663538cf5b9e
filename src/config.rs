//! Runtime configuration read from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SHARDWALK_VIEW_WIDTH` | 25 |
//! | `SHARDWALK_VIEW_HEIGHT` | 20 |
//! | `SHARDWALK_GEOMETRY` | `hyperbolic` |
//! | `SHARDWALK_LOG_LINES` | 64 |
//! | `SHARDWALK_JOURNAL_PATH` | unset |
//! | `SHARDWALK_JOURNAL_DISABLED` | unset |
//!
//! Values that do not parse fall back to the default.

use std::path::PathBuf;

use crate::core::SessionOptions;
use crate::types::{RenderMode, QUEST_LOG_CAPACITY, VIEW_HEIGHT, VIEW_WIDTH};

/// Smallest and largest accepted map dimension, in tiles.
pub const MIN_VIEW_TILES: u16 = 5;
pub const MAX_VIEW_TILES: u16 = 101;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub view_width: u16,
    pub view_height: u16,
    pub render_mode: RenderMode,
    pub log_capacity: usize,
    pub journal_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            render_mode: RenderMode::Hyperbolic,
            log_capacity: QUEST_LOG_CAPACITY,
            journal_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key/value source (used by tests instead of the process env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let view_width = lookup("SHARDWALK_VIEW_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(clamp_tiles)
            .unwrap_or(defaults.view_width);

        let view_height = lookup("SHARDWALK_VIEW_HEIGHT")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(clamp_tiles)
            .unwrap_or(defaults.view_height);

        let render_mode = lookup("SHARDWALK_GEOMETRY")
            .and_then(|s| RenderMode::from_str(&s))
            .unwrap_or(defaults.render_mode);

        let log_capacity = lookup("SHARDWALK_LOG_LINES")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.log_capacity);

        let journal_disabled = lookup("SHARDWALK_JOURNAL_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let journal_path = lookup("SHARDWALK_JOURNAL_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty() && !journal_disabled)
            .map(PathBuf::from);

        Self {
            view_width,
            view_height,
            render_mode,
            log_capacity,
            journal_path,
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            render_mode: self.render_mode,
            log_capacity: self.log_capacity,
        }
    }
}

fn clamp_tiles(n: u16) -> u16 {
    n.clamp(MIN_VIEW_TILES, MAX_VIEW_TILES)
}
