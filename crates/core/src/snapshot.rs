use std::borrow::Cow;

use crate::types::{Position, RenderMode, ShardId, SpecialFlags, SpecialTag};

/// Everything a renderer needs to draw one frame of the world.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub position: Position,
    pub shard: ShardId,
    pub location_name: Cow<'static, str>,
    pub glyph: char,
    pub node_count: u64,
    pub special: Option<SpecialTag>,
    pub topology: &'static str,
    pub visited_count: u32,
    pub steps: u64,
    pub distance: f64,
    pub bearing_degrees: f64,
    pub render_mode: RenderMode,
    pub discovered: SpecialFlags,
}

impl WorldSnapshot {
    pub fn clear(&mut self) {
        self.position = Position::ORIGIN;
        self.shard = ShardId::ORIGIN;
        self.location_name = Cow::Borrowed("");
        self.glyph = ' ';
        self.node_count = 0;
        self.special = None;
        self.topology = "";
        self.visited_count = 0;
        self.steps = 0;
        self.distance = 0.0;
        self.bearing_degrees = 0.0;
        self.render_mode = RenderMode::Hyperbolic;
        self.discovered = SpecialFlags::empty();
    }

    /// `true` once all three specials have been found.
    pub fn quest_complete(&self) -> bool {
        self.discovered.len() == SpecialTag::ALL.len()
    }
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        let mut s = Self {
            position: Position::ORIGIN,
            shard: ShardId::ORIGIN,
            location_name: Cow::Borrowed(""),
            glyph: ' ',
            node_count: 0,
            special: None,
            topology: "",
            visited_count: 0,
            steps: 0,
            distance: 0.0,
            bearing_degrees: 0.0,
            render_mode: RenderMode::Hyperbolic,
            discovered: SpecialFlags::empty(),
        };
        s.clear();
        s
    }
}
