//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, event journal).
//!
//! # The Shard Ring
//!
//! The plane around the origin is cut into [`SHARD_COUNT`] angular sectors.
//! Every grid cell belongs to exactly one sector, identified by a [`ShardId`].
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SHARD_COUNT` | 71 | Number of angular sectors |
//! | `VIEW_WIDTH` | 25 | Default map width in tiles |
//! | `VIEW_HEIGHT` | 20 | Default map height in tiles |
//! | `DISTANCE_SCALE` | 100.0 | Euclidean length mapped onto the unit disk |
//! | `DISTANCE_CLAMP` | 0.99 | Largest `atanh` argument before clamping |
//! | `TELEPORT_BASE_RADIUS` | 10 | Radius offset used by teleport placement |
//!
//! # Examples
//!
//! ```
//! use shardwalk_types::{GameAction, Position, RenderMode, ShardId, SpecialTag};
//!
//! let shard = ShardId::new(17).unwrap();
//! assert_eq!(shard, ShardId::CUSP);
//! assert_eq!(SpecialTag::Cusp.shard(), shard);
//!
//! assert_eq!(RenderMode::Hyperbolic.toggled(), RenderMode::Euclidean);
//!
//! let pos = Position::new(3, -4).offset(1, 1);
//! assert_eq!(pos, Position::new(4, -3));
//!
//! assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::MoveUp));
//! ```

use std::fmt;

/// Number of angular shards around the origin.
pub const SHARD_COUNT: u8 = 71;

/// Default map width in tiles.
pub const VIEW_WIDTH: u16 = 25;

/// Default map height in tiles.
pub const VIEW_HEIGHT: u16 = 20;

/// Euclidean length that maps onto the edge of the unit disk.
pub const DISTANCE_SCALE: f64 = 100.0;

/// Upper bound for the `atanh` argument in the distance model.
pub const DISTANCE_CLAMP: f64 = 0.99;

/// Teleport places the player at radius `TELEPORT_BASE_RADIUS + shard`.
pub const TELEPORT_BASE_RADIUS: i64 = 10;

/// Default number of quest log entries kept in memory.
pub const QUEST_LOG_CAPACITY: usize = 64;

/// One of the 71 angular sectors of the plane.
///
/// Always in `[0, SHARD_COUNT)`; the only way to build one is [`ShardId::new`]
/// or [`ShardId::wrapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ShardId(u8);

impl ShardId {
    pub const ORIGIN: ShardId = ShardId(0);
    pub const CUSP: ShardId = ShardId(17);
    pub const CONSCIOUSNESS: ShardId = ShardId(23);
    pub const MEMORY: ShardId = ShardId(59);

    /// Returns `None` when `index >= SHARD_COUNT`.
    ///
    /// ```
    /// use shardwalk_types::ShardId;
    ///
    /// assert!(ShardId::new(70).is_some());
    /// assert!(ShardId::new(71).is_none());
    /// ```
    pub const fn new(index: u8) -> Option<Self> {
        if index < SHARD_COUNT {
            Some(ShardId(index))
        } else {
            None
        }
    }

    /// Reduce any integer onto the ring (Euclidean remainder).
    pub fn wrapping(index: i64) -> Self {
        ShardId(index.rem_euclid(SHARD_COUNT as i64) as u8)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Iterate over every shard in ascending order.
    pub fn all() -> impl Iterator<Item = ShardId> {
        (0..SHARD_COUNT).map(ShardId)
    }
}

impl fmt::Display for ShardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grid coordinate. The grid is unbounded; arithmetic saturates at `i64` limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    pub fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// The three lore shards that trigger a one-time discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialTag {
    Cusp,
    Consciousness,
    Memory,
}

impl SpecialTag {
    pub const ALL: [SpecialTag; 3] = [SpecialTag::Cusp, SpecialTag::Consciousness, SpecialTag::Memory];

    /// The shard carrying this tag.
    pub fn shard(self) -> ShardId {
        match self {
            SpecialTag::Cusp => ShardId::CUSP,
            SpecialTag::Consciousness => ShardId::CONSCIOUSNESS,
            SpecialTag::Memory => ShardId::MEMORY,
        }
    }

    /// Glyph prefixed to the discovery log entry.
    pub fn glyph(self) -> char {
        match self {
            SpecialTag::Cusp => '🐯',
            SpecialTag::Consciousness => '🧬',
            SpecialTag::Memory => '🌙',
        }
    }

    /// Bit used by [`SpecialFlags`].
    const fn bit(self) -> u8 {
        match self {
            SpecialTag::Cusp => 0b001,
            SpecialTag::Consciousness => 0b010,
            SpecialTag::Memory => 0b100,
        }
    }

    /// Parse tag from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cusp" => Some(SpecialTag::Cusp),
            "consciousness" => Some(SpecialTag::Consciousness),
            "memory" => Some(SpecialTag::Memory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialTag::Cusp => "CUSP",
            SpecialTag::Consciousness => "CONSCIOUSNESS",
            SpecialTag::Memory => "MEMORY",
        }
    }
}

/// Set of discovered special tags. Only grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpecialFlags(u8);

impl SpecialFlags {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(self, tag: SpecialTag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// Returns `true` if the tag was not present before.
    pub fn insert(&mut self, tag: SpecialTag) -> bool {
        let fresh = !self.contains(tag);
        self.0 |= tag.bit();
        fresh
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = SpecialTag> {
        SpecialTag::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

/// Fixed-size set of shards (one bit per shard). Only grows.
///
/// ```
/// use shardwalk_types::{ShardId, ShardSet};
///
/// let mut set = ShardSet::with(ShardId::ORIGIN);
/// assert!(set.insert(ShardId::CUSP));
/// assert!(!set.insert(ShardId::CUSP));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShardSet(u128);

impl ShardSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn with(shard: ShardId) -> Self {
        let mut set = Self::empty();
        set.insert(shard);
        set
    }

    pub fn contains(self, shard: ShardId) -> bool {
        self.0 & (1u128 << shard.index()) != 0
    }

    /// Returns `true` if the shard was not present before.
    pub fn insert(&mut self, shard: ShardId) -> bool {
        let fresh = !self.contains(shard);
        self.0 |= 1u128 << shard.index();
        fresh
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = ShardId> {
        ShardId::all().filter(move |s| self.contains(*s))
    }
}

/// How the map is drawn around the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Tiles shrink with hyperbolic distance from the player.
    #[default]
    Hyperbolic,
    /// Every tile drawn at full scale.
    Euclidean,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Hyperbolic => RenderMode::Euclidean,
            RenderMode::Euclidean => RenderMode::Hyperbolic,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hyperbolic" | "h" => Some(RenderMode::Hyperbolic),
            "euclidean" | "e" => Some(RenderMode::Euclidean),
            _ => None,
        }
    }

    /// Display label ("Hyperbolic" / "Euclidean").
    pub fn label(&self) -> &'static str {
        match self {
            RenderMode::Hyperbolic => "Hyperbolic",
            RenderMode::Euclidean => "Euclidean",
        }
    }
}

/// Player actions, one per input binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Step to (x, y - 1)
    MoveUp,
    /// Step to (x, y + 1)
    MoveDown,
    /// Step to (x - 1, y)
    MoveLeft,
    /// Step to (x + 1, y)
    MoveRight,
    /// Jump towards the CUSP shard
    TeleportCusp,
    /// Jump towards the CONSCIOUSNESS shard
    TeleportConsciousness,
    /// Jump towards the MEMORY shard
    TeleportMemory,
    /// Log a summary of the current shard
    ShowInfo,
    /// Flip between hyperbolic and euclidean rendering
    ToggleGeometry,
}

impl GameAction {
    /// Grid delta for the four movement actions.
    ///
    /// ```
    /// use shardwalk_types::GameAction;
    ///
    /// assert_eq!(GameAction::MoveUp.delta(), Some((0, -1)));
    /// assert_eq!(GameAction::ShowInfo.delta(), None);
    /// ```
    pub fn delta(&self) -> Option<(i64, i64)> {
        match self {
            GameAction::MoveUp => Some((0, -1)),
            GameAction::MoveDown => Some((0, 1)),
            GameAction::MoveLeft => Some((-1, 0)),
            GameAction::MoveRight => Some((1, 0)),
            _ => None,
        }
    }

    /// Target shard for the three teleport shortcuts.
    pub fn teleport_target(&self) -> Option<SpecialTag> {
        match self {
            GameAction::TeleportCusp => Some(SpecialTag::Cusp),
            GameAction::TeleportConsciousness => Some(SpecialTag::Consciousness),
            GameAction::TeleportMemory => Some(SpecialTag::Memory),
            _ => None,
        }
    }

    /// Parse action from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::MoveUp),
            "movedown" => Some(GameAction::MoveDown),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "teleportcusp" => Some(GameAction::TeleportCusp),
            "teleportconsciousness" => Some(GameAction::TeleportConsciousness),
            "teleportmemory" => Some(GameAction::TeleportMemory),
            "showinfo" => Some(GameAction::ShowInfo),
            "togglegeometry" => Some(GameAction::ToggleGeometry),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::TeleportCusp => "teleportCusp",
            GameAction::TeleportConsciousness => "teleportConsciousness",
            GameAction::TeleportMemory => "teleportMemory",
            GameAction::ShowInfo => "showInfo",
            GameAction::ToggleGeometry => "toggleGeometry",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_shards_are_fixed() {
        assert_eq!(ShardId::CUSP.index(), 17);
        assert_eq!(ShardId::CONSCIOUSNESS.index(), 23);
        assert_eq!(ShardId::MEMORY.index(), 59);
        for tag in SpecialTag::ALL {
            assert_eq!(SpecialTag::from_str(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn wrapping_reduces_negative_indices() {
        assert_eq!(ShardId::wrapping(71), ShardId::ORIGIN);
        assert_eq!(ShardId::wrapping(-1).index(), 70);
        assert_eq!(ShardId::wrapping(142 + 5).index(), 5);
    }

    #[test]
    fn shard_set_covers_every_shard() {
        let mut set = ShardSet::empty();
        for s in ShardId::all() {
            assert!(set.insert(s));
        }
        assert_eq!(set.len(), SHARD_COUNT as usize);
        assert!(set.contains(ShardId::new(70).unwrap()));
        assert_eq!(set.iter().count(), SHARD_COUNT as usize);
    }

    #[test]
    fn special_flags_only_grow() {
        let mut flags = SpecialFlags::empty();
        assert!(flags.insert(SpecialTag::Memory));
        assert!(!flags.insert(SpecialTag::Memory));
        assert!(flags.insert(SpecialTag::Cusp));
        assert_eq!(flags.len(), 2);
        assert_eq!(
            flags.iter().collect::<Vec<_>>(),
            vec![SpecialTag::Cusp, SpecialTag::Memory]
        );
    }

    #[test]
    fn action_names_round_trip() {
        let all = [
            GameAction::MoveUp,
            GameAction::MoveDown,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::TeleportCusp,
            GameAction::TeleportConsciousness,
            GameAction::TeleportMemory,
            GameAction::ShowInfo,
            GameAction::ToggleGeometry,
        ];
        for action in all {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn position_offset_saturates() {
        let p = Position::new(i64::MAX, 0).offset(1, -1);
        assert_eq!(p, Position::new(i64::MAX, -1));
    }
}
