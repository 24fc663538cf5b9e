//! Coordinate mapper - grid cell to shard, glyph and distance.
//!
//! All functions here are pure. A shard depends only on the direction from the
//! origin to a cell, never on its distance, so every ray out of the origin lies
//! inside a single shard.

use std::f64::consts::{PI, TAU};

use crate::locations::shard_glyph;
use crate::types::{Position, ShardId, DISTANCE_CLAMP, DISTANCE_SCALE, SHARD_COUNT};

/// Angular hash of a grid cell.
///
/// `atan2(y, x)` is shifted into `[0, 2π]`, scaled to 71 sectors and floored.
/// The origin has no direction and is pinned to shard 0.
///
/// ```
/// use shardwalk_core::mapper::shard_of;
///
/// assert_eq!(shard_of(0, 0).index(), 0);
/// assert_eq!(shard_of(10, 0), shard_of(1, 0));
/// assert_eq!(shard_of(0, -1).index(), 17);
/// ```
pub fn shard_of(x: i64, y: i64) -> ShardId {
    if x == 0 && y == 0 {
        return ShardId::ORIGIN;
    }
    let angle = (y as f64).atan2(x as f64);
    let sector = ((angle + PI) / TAU * SHARD_COUNT as f64).floor() as i64;
    ShardId::wrapping(sector)
}

pub fn shard_at(pos: Position) -> ShardId {
    shard_of(pos.x, pos.y)
}

/// Terrain glyph for a grid cell.
pub fn glyph_of(x: i64, y: i64) -> char {
    shard_glyph(shard_of(x, y))
}

/// Hyperbolic-looking zoom factor between two cells.
///
/// Euclidean length is squashed onto the unit disk (`e / 100`) and fed through
/// `2·atanh`. The argument is clamped at 0.99 so the result never diverges; past
/// a Euclidean length of 99 it stays at [`distance_ceiling`].
pub fn hyperbolic_distance(x1: i64, y1: i64, x2: i64, y2: i64) -> f64 {
    let dx = x2 as f64 - x1 as f64;
    let dy = y2 as f64 - y1 as f64;
    let e = dx.hypot(dy);
    2.0 * (e / DISTANCE_SCALE).min(DISTANCE_CLAMP).atanh()
}

/// Distance from the origin to `pos`.
pub fn distance_from_origin(pos: Position) -> f64 {
    hyperbolic_distance(0, 0, pos.x, pos.y)
}

/// Largest value [`hyperbolic_distance`] can return (≈ 5.293).
pub fn distance_ceiling() -> f64 {
    2.0 * DISTANCE_CLAMP.atanh()
}

/// Direction from the origin to `pos` in degrees, `(-180, 180]`. Zero at the origin.
pub fn bearing_degrees(pos: Position) -> f64 {
    if pos.is_origin() {
        return 0.0;
    }
    (pos.y as f64).atan2(pos.x as f64).to_degrees()
}

/// Tile scale used by the hyperbolic render mode: 1 at the player, shrinking outwards.
pub fn tile_scale(distance: f64) -> f64 {
    1.0 / (1.0 + distance * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_pinned_to_zero() {
        assert_eq!(shard_of(0, 0), ShardId::ORIGIN);
    }

    #[test]
    fn shard_always_in_range() {
        for x in -40..=40 {
            for y in -40..=40 {
                assert!(shard_of(x, y).index() < SHARD_COUNT);
            }
        }
        assert!(shard_of(i64::MAX, i64::MIN).index() < SHARD_COUNT);
        assert!(shard_of(i64::MIN, 0).index() < SHARD_COUNT);
    }

    #[test]
    fn negative_x_axis_wraps_to_zero() {
        // atan2(0, -x) = π, which lands exactly on sector 71 before reduction.
        assert_eq!(shard_of(-1, 0), ShardId::ORIGIN);
        assert_eq!(shard_of(-500, 0), ShardId::ORIGIN);
    }

    #[test]
    fn axis_directions() {
        assert_eq!(shard_of(1, 0).index(), 35);
        assert_eq!(shard_of(0, 1).index(), 53);
        assert_eq!(shard_of(0, -1).index(), 17);
    }

    #[test]
    fn special_directions() {
        assert_eq!(shard_of(-1, -20), ShardId::CUSP);
        assert_eq!(shard_of(5, -9), ShardId::CONSCIOUSNESS);
        assert_eq!(shard_of(-5, 8), ShardId::MEMORY);
    }

    #[test]
    fn glyph_follows_location_table() {
        assert_eq!(glyph_of(1, 0), '🗼');
        assert_eq!(glyph_of(0, -3), '🐯');
        // Shard 53 has no landmark: palette[53 % 15] = palette[8].
        assert_eq!(glyph_of(0, 4), '🧬');
    }

    #[test]
    fn distance_is_zero_on_same_cell() {
        assert_eq!(hyperbolic_distance(7, -3, 7, -3), 0.0);
    }

    #[test]
    fn distance_is_clamped() {
        let ceiling = distance_ceiling();
        assert!((ceiling - 5.293).abs() < 1e-3);
        assert_eq!(hyperbolic_distance(0, 0, 99, 0), ceiling);
        assert_eq!(hyperbolic_distance(0, 0, 5_000, 5_000), ceiling);
        assert!(hyperbolic_distance(0, 0, 98, 0) < ceiling);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(
            hyperbolic_distance(1, 2, -4, 9),
            hyperbolic_distance(-4, 9, 1, 2)
        );
    }

    #[test]
    fn bearing_in_degrees() {
        assert_eq!(bearing_degrees(Position::ORIGIN), 0.0);
        assert!((bearing_degrees(Position::new(0, 5)) - 90.0).abs() < 1e-9);
        assert!((bearing_degrees(Position::new(-3, 0)) - 180.0).abs() < 1e-9);
        assert!((bearing_degrees(Position::new(4, -4)) + 45.0).abs() < 1e-9);
    }

    #[test]
    fn tile_scale_shrinks_with_distance() {
        assert_eq!(tile_scale(0.0), 1.0);
        assert!(tile_scale(1.0) < tile_scale(0.5));
        assert!(tile_scale(distance_ceiling()) > 0.0);
    }
}
