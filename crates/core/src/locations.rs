//! Location table - lore for the named shards, synthesized records for the rest.
//!
//! Ten shards carry a fixed [`Landmark`]. Every other shard gets a record
//! built on demand from its index, so [`location_info`] is total.

use std::borrow::Cow;

use crate::types::{ShardId, SpecialTag};

/// Glyphs for shards without a landmark, indexed by `shard mod 15`.
pub const FALLBACK_GLYPHS: [char; 15] = [
    '🏙', '🌊', '🏔', '🛣', '🌳', '🏛', '🐯', '⚡', '🧬', '🌙', '📡', '🎭', '👁', '🔬', '🎓',
];

/// Tenfold-way topology class, indexed by `shard mod 10`.
pub const TENFOLD: [&str; 10] = [
    "🌀 A", "🔱 AIII", "⚛️ AI", "🌳 BDI", "💎 D", "🌊 DIII", "🧬 AII", "🔮 CII", "⚡ C", "🌌 CI",
];

/// Nodes per shard used when synthesizing a record.
pub const NODES_PER_SHARD: u64 = 45_000_000_000;

/// A fixed, named shard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    pub shard: u8,
    pub name: &'static str,
    pub glyph: char,
    pub node_count: u64,
    pub special: Option<SpecialTag>,
}

/// Sorted by shard index.
pub static LANDMARKS: [Landmark; 10] = [
    Landmark {
        shard: 0,
        name: "Pacific Ocean",
        glyph: '🌊',
        node_count: 0,
        special: None,
    },
    Landmark {
        shard: 5,
        name: "Himalayas",
        glyph: '🏔',
        node_count: 225_000_000_000,
        special: None,
    },
    Landmark {
        shard: 10,
        name: "Amazon",
        glyph: '🌳',
        node_count: 450_000_000_000,
        special: None,
    },
    Landmark {
        shard: 17,
        name: "Giza Pyramids",
        glyph: '🐯',
        node_count: 765_000_000_000,
        special: Some(SpecialTag::Cusp),
    },
    Landmark {
        shard: 23,
        name: "Silicon Valley",
        glyph: '🧬',
        node_count: 1_035_000_000_000,
        special: Some(SpecialTag::Consciousness),
    },
    Landmark {
        shard: 30,
        name: "New York",
        glyph: '🏙',
        node_count: 1_350_000_000_000,
        special: None,
    },
    Landmark {
        shard: 35,
        name: "Tokyo",
        glyph: '🗼',
        node_count: 1_575_000_000_000,
        special: None,
    },
    Landmark {
        shard: 40,
        name: "London",
        glyph: '🏰',
        node_count: 1_800_000_000_000,
        special: None,
    },
    Landmark {
        shard: 59,
        name: "Ramanujan Temple",
        glyph: '🌙',
        node_count: 2_655_000_000_000,
        special: Some(SpecialTag::Memory),
    },
    Landmark {
        shard: 70,
        name: "Omega Point",
        glyph: '⚡',
        node_count: 3_150_000_000_000,
        special: None,
    },
];

/// Everything the UI shows about a shard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationInfo {
    pub shard: ShardId,
    pub name: Cow<'static, str>,
    pub glyph: char,
    pub node_count: u64,
    pub special: Option<SpecialTag>,
}

impl LocationInfo {
    /// `true` when the record comes from the landmark table.
    pub fn is_landmark(&self) -> bool {
        landmark(self.shard).is_some()
    }

    /// Node count in billions, as shown in the info log line.
    pub fn node_billions(&self) -> f64 {
        self.node_count as f64 / 1e9
    }
}

impl From<&Landmark> for LocationInfo {
    fn from(value: &Landmark) -> Self {
        Self {
            shard: ShardId::wrapping(value.shard as i64),
            name: Cow::Borrowed(value.name),
            glyph: value.glyph,
            node_count: value.node_count,
            special: value.special,
        }
    }
}

/// Look up the landmark for a shard, if it has one.
pub fn landmark(shard: ShardId) -> Option<&'static Landmark> {
    LANDMARKS
        .binary_search_by_key(&shard.index(), |l| l.shard)
        .ok()
        .map(|i| &LANDMARKS[i])
}

/// Palette glyph for a shard without a landmark.
pub fn fallback_glyph(shard: ShardId) -> char {
    FALLBACK_GLYPHS[shard.index() as usize % FALLBACK_GLYPHS.len()]
}

/// Landmark glyph, or the palette glyph.
pub fn shard_glyph(shard: ShardId) -> char {
    landmark(shard)
        .map(|l| l.glyph)
        .unwrap_or_else(|| fallback_glyph(shard))
}

/// Special tag carried by a shard (only landmarks carry one).
pub fn special_of(shard: ShardId) -> Option<SpecialTag> {
    landmark(shard).and_then(|l| l.special)
}

pub fn topology_of(shard: ShardId) -> &'static str {
    TENFOLD[shard.index() as usize % TENFOLD.len()]
}

/// Resolve a shard to its location record. Never fails.
pub fn location_info(shard: ShardId) -> LocationInfo {
    if let Some(l) = landmark(shard) {
        return LocationInfo::from(l);
    }

    let index = shard.index() as u64;
    LocationInfo {
        shard,
        name: Cow::Owned(format!("Shard {}", index)),
        glyph: fallback_glyph(shard),
        node_count: if index == 0 {
            0
        } else {
            NODES_PER_SHARD * (index + 1)
        },
        special: None,
    }
}
