//! Player state tracker.
//!
//! Holds the player's position and the monotonic sets (visited shards,
//! announced landmarks, discovered specials). Every state-changing operation
//! returns the events it produced, in order, for the presentation layer.
//! Moves, teleports and mode toggles never allocate.

use std::f64::consts::TAU;

use arrayvec::ArrayVec;

use crate::locations::{landmark, location_info, special_of, topology_of, LocationInfo};
use crate::mapper::{bearing_degrees, distance_from_origin, shard_at};
use crate::snapshot::WorldSnapshot;
use crate::types::*;

/// Maximum number of events a single operation can produce.
pub const MAX_EVENTS: usize = 4;

/// Events produced by one operation.
pub type Events = ArrayVec<QuestEvent, MAX_EVENTS>;

/// Position-derived facts refreshed after every move or teleport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateUpdate {
    pub position: Position,
    pub shard: ShardId,
    pub distance: f64,
    pub bearing_degrees: f64,
}

/// Something worth showing to the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuestEvent {
    /// First arrival on a special shard (once per tag per session).
    Discovered { tag: SpecialTag, shard: ShardId },
    /// First arrival on a landmark shard (once per landmark per session).
    Announced { shard: ShardId },
    Teleported { shard: ShardId },
    GeometryChanged { mode: RenderMode },
    /// Summary of the current shard requested by the player.
    Info { shard: ShardId },
    StateUpdated(StateUpdate),
}

/// Read-only view of the current shard.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub shard: ShardId,
    pub location: LocationInfo,
    pub distance: f64,
    pub bearing_degrees: f64,
}

/// Where `teleport(shard)` places the player.
///
/// Radius `10 + shard`, angle `shard / 71 · 2π`, both coordinates floored.
/// The landing cell's own shard is generally *not* `shard`.
pub fn teleport_position(shard: ShardId) -> Position {
    let s = shard.index() as f64;
    let angle = s / SHARD_COUNT as f64 * TAU;
    let radius = (TELEPORT_BASE_RADIUS as f64) + s;
    Position::new(
        (radius * angle.cos()).floor() as i64,
        (radius * angle.sin()).floor() as i64,
    )
}

/// Complete player state for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    position: Position,
    /// Incremented once per move; teleports do not count.
    steps: u64,
    visited: ShardSet,
    announced: ShardSet,
    discovered: SpecialFlags,
    render_mode: RenderMode,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// Fresh player at the origin, in hyperbolic mode.
    pub fn new() -> Self {
        Self::with_render_mode(RenderMode::Hyperbolic)
    }

    pub fn with_render_mode(render_mode: RenderMode) -> Self {
        Self {
            position: Position::ORIGIN,
            steps: 0,
            visited: ShardSet::with(ShardId::ORIGIN),
            announced: ShardSet::with(ShardId::ORIGIN),
            discovered: SpecialFlags::empty(),
            render_mode,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn visited(&self) -> ShardSet {
        self.visited
    }

    pub fn announced(&self) -> ShardSet {
        self.announced
    }

    pub fn discovered(&self) -> SpecialFlags {
        self.discovered
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn shard(&self) -> ShardId {
        shard_at(self.position)
    }

    /// Step by `(dx, dy)` and report what the new cell reveals.
    ///
    /// Order: discovery (if any), announcement (if any), state update.
    pub fn move_by(&mut self, dx: i64, dy: i64) -> Events {
        self.position = self.position.offset(dx, dy);
        self.steps += 1;

        let mut events = Events::new();
        let shard = self.shard();
        let special = special_of(shard);

        for tag in SpecialTag::ALL {
            if special == Some(tag) && self.discovered.insert(tag) {
                events.push(QuestEvent::Discovered { tag, shard });
            }
        }

        if landmark(shard).is_some() && self.announced.insert(shard) {
            events.push(QuestEvent::Announced { shard });
        }

        events.push(QuestEvent::StateUpdated(self.state_update()));
        self.mark_visited();
        events
    }

    /// Jump to the teleport cell for `shard`. Does not count as a step and does
    /// not trigger discoveries or announcements.
    pub fn teleport(&mut self, shard: ShardId) -> Events {
        self.position = teleport_position(shard);

        let mut events = Events::new();
        events.push(QuestEvent::Teleported { shard });
        events.push(QuestEvent::StateUpdated(self.state_update()));
        self.mark_visited();
        events
    }

    pub fn toggle_render_mode(&mut self) -> Events {
        self.render_mode = self.render_mode.toggled();

        let mut events = Events::new();
        events.push(QuestEvent::GeometryChanged {
            mode: self.render_mode,
        });
        events
    }

    /// Record the current shard as visited. Returns `true` on first visit.
    pub fn mark_visited(&mut self) -> bool {
        let shard = self.shard();
        self.visited.insert(shard)
    }

    pub fn summary(&self) -> Summary {
        let shard = self.shard();
        Summary {
            shard,
            location: location_info(shard),
            distance: distance_from_origin(self.position),
            bearing_degrees: bearing_degrees(self.position),
        }
    }

    fn state_update(&self) -> StateUpdate {
        StateUpdate {
            position: self.position,
            shard: self.shard(),
            distance: distance_from_origin(self.position),
            bearing_degrees: bearing_degrees(self.position),
        }
    }

    pub fn snapshot_into(&self, out: &mut WorldSnapshot) {
        let Summary {
            shard,
            location,
            distance,
            bearing_degrees,
        } = self.summary();

        out.position = self.position;
        out.shard = shard;
        out.location_name = location.name;
        out.glyph = location.glyph;
        out.node_count = location.node_count;
        out.special = location.special;
        out.topology = topology_of(shard);
        out.visited_count = self.visited.len() as u32;
        out.steps = self.steps;
        out.distance = distance;
        out.bearing_degrees = bearing_degrees;
        out.render_mode = self.render_mode;
        out.discovered = self.discovered;
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let mut s = WorldSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
