//! Session - the controller that owns the player state and the quest log.
//!
//! Input handlers call [`Session::apply_action`]; the session dispatches to the
//! player state tracker and turns the resulting events into log lines.

use crate::locations::{landmark, location_info, topology_of};
use crate::player::{Events, PlayerState, QuestEvent};
use crate::quest_log::QuestLog;
use crate::snapshot::WorldSnapshot;
use crate::types::*;

/// First line of every quest log.
pub const OPENING_LINE: &str = "⚡ Quest begun! Walk the hyperbolic plane.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub render_mode: RenderMode,
    pub log_capacity: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            render_mode: RenderMode::Hyperbolic,
            log_capacity: QUEST_LOG_CAPACITY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    player: PlayerState,
    log: QuestLog,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        let mut log = QuestLog::new(options.log_capacity);
        log.push(0, OPENING_LINE);
        Self {
            player: PlayerState::with_render_mode(options.render_mode),
            log,
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn log(&self) -> &QuestLog {
        &self.log
    }

    /// Apply one input action, log its events and return them.
    pub fn apply_action(&mut self, action: GameAction) -> Events {
        let events = match (action.delta(), action.teleport_target()) {
            (Some((dx, dy)), _) => self.player.move_by(dx, dy),
            (None, Some(tag)) => self.player.teleport(tag.shard()),
            (None, None) if action == GameAction::ToggleGeometry => {
                self.player.toggle_render_mode()
            }
            // ShowInfo
            (None, None) => {
                let mut events = Events::new();
                events.push(QuestEvent::Info {
                    shard: self.player.shard(),
                });
                events
            }
        };

        for event in &events {
            if let Some(line) = describe(event) {
                self.log.push(self.player.steps(), line);
            }
        }
        events
    }

    pub fn snapshot_into(&self, out: &mut WorldSnapshot) {
        self.player.snapshot_into(out);
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        self.player.snapshot()
    }
}

/// Log line for an event. State updates are not logged.
pub fn describe(event: &QuestEvent) -> Option<String> {
    match *event {
        QuestEvent::Discovered { tag, shard } => Some(format!(
            "{} FOUND: {}!",
            tag.glyph(),
            location_info(shard).name
        )),
        QuestEvent::Announced { shard } => landmark(shard).map(|l| format!("📍 {} {}", l.glyph, l.name)),
        QuestEvent::Teleported { shard } => Some(format!("⚡ Teleported to Shard {}", shard)),
        QuestEvent::GeometryChanged { mode } => Some(format!("Geometry: {}", mode.label())),
        QuestEvent::Info { shard } => {
            let info = location_info(shard);
            Some(format!(
                "{} {}: {:.1}B nodes, {}",
                info.glyph,
                info.name,
                info.node_billions(),
                topology_of(shard)
            ))
        }
        QuestEvent::StateUpdated(_) => None,
    }
}
