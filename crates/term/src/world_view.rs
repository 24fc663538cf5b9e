//! WorldView: maps a `core::WorldSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::locations::{shard_glyph, special_of};
use crate::core::{hyperbolic_distance, shard_of, tile_scale, QuestLog, WorldSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{RenderMode, SpecialTag, SHARD_COUNT, VIEW_HEIGHT, VIEW_WIDTH};

/// Tile width in terminal columns (one emoji).
const CELL_W: u16 = 2;

/// Columns reserved for the side panel.
pub const PANEL_WIDTH: u16 = 30;

/// Gap between the map frame and the side panel.
const PANEL_GAP: u16 = 2;

/// Column where panel values start, relative to the panel.
const VALUE_COL: u16 = 10;

/// Default number of quest log rows under the map.
pub const LOG_ROWS: u16 = 5;

pub const AVATAR: char = '🧙';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal renderer for the world map, status panel and quest log.
#[derive(Debug, Clone)]
pub struct WorldView {
    /// Map width in tiles.
    map_w: u16,
    /// Map height in tiles.
    map_h: u16,
    log_rows: u16,
    anchor_y: AnchorY,
}

impl Default for WorldView {
    fn default() -> Self {
        Self::new(VIEW_WIDTH, VIEW_HEIGHT)
    }
}

impl WorldView {
    pub fn new(map_w: u16, map_h: u16) -> Self {
        Self {
            map_w: map_w.max(1),
            map_h: map_h.max(1),
            log_rows: LOG_ROWS,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered map in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (self.map_w * CELL_W + 2, self.map_h + 2)
    }

    /// Render the world into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &WorldSnapshot,
        log: &QuestLog,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let total_w = frame_w + PANEL_GAP + PANEL_WIDTH;
        let total_h = frame_h + self.log_rows;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        self.draw_tiles(fb, snap, start_x, start_y);
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
        self.draw_log(fb, log, viewport, start_x, start_y.saturating_add(frame_h));
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &WorldSnapshot, log: &QuestLog, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, log, viewport, &mut fb);
        fb
    }

    /// Terminal cell of the tile at `(tx, ty)`, relative to the frame origin.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, tx: u16, ty: u16) -> (u16, u16) {
        (start_x + 1 + tx * CELL_W, start_y + 1 + ty)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tiles(&self, fb: &mut FrameBuffer, snap: &WorldSnapshot, start_x: u16, start_y: u16) {
        let half_w = (self.map_w / 2) as i64;
        let half_h = (self.map_h / 2) as i64;
        let origin_x = snap.position.x.saturating_sub(half_w);
        let origin_y = snap.position.y.saturating_sub(half_h);

        for ty in 0..self.map_h {
            for tx in 0..self.map_w {
                let (px, py) = self.tile_origin(start_x, start_y, tx, ty);

                if tx as i64 == half_w && ty as i64 == half_h {
                    let style = CellStyle {
                        fg: Rgb::new(255, 255, 255),
                        bg: Rgb::new(70, 70, 110),
                        bold: true,
                        dim: false,
                    };
                    fb.put_wide(px, py, AVATAR, style);
                    continue;
                }

                let wx = origin_x.saturating_add(tx as i64);
                let wy = origin_y.saturating_add(ty as i64);
                let shard = shard_of(wx, wy);
                let style = tile_style(snap, wx, wy, special_of(shard));
                fb.put_wide(px, py, shard_glyph(shard), style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &WorldSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(PANEL_GAP);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < VALUE_COL + 6 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let vx = panel_x + VALUE_COL;

        let mut y = start_y;
        fb.put_str(panel_x, y, "POSITION", label);
        fb.put_str(vx, y, &snap.position.to_string(), value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "SHARD", label);
        let end = fb.put_u64(vx, y, snap.shard.index() as u64, value);
        fb.put_str(end, y, " - ", value);
        fb.put_str(end + 3, y, &snap.location_name, value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "NODES", label);
        fb.put_str(vx, y, &group_thousands(snap.node_count), value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "TOPOLOGY", label);
        fb.put_str(vx, y, snap.topology, value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "STEPS", label);
        fb.put_u64(vx, y, snap.steps, value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "VISITED", label);
        let end = fb.put_u64(vx, y, snap.visited_count as u64, value);
        fb.put_char(end, y, '/', value);
        fb.put_u64(end + 1, y, SHARD_COUNT as u64, value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "DISTANCE", label);
        fb.put_str(vx, y, &format!("{:.2}", snap.distance), value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "ANGLE", label);
        fb.put_str(vx, y, &format!("{:.1}°", snap.bearing_degrees), value);
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "GEOMETRY", label);
        fb.put_str(vx, y, snap.render_mode.label(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "QUEST", label);
        let mut x = vx;
        for tag in SpecialTag::ALL {
            if snap.discovered.contains(tag) {
                fb.put_wide(x, y, tag.glyph(), value);
            } else {
                fb.put_char(x, y, '·', CellStyle { dim: true, ..value });
            }
            x = x.saturating_add(3);
        }
        y = y.saturating_add(2);

        let help = CellStyle { dim: true, ..value };
        for line in [
            "WASD/arrows  move",
            "C L M        teleport",
            "SPACE        info",
            "H            geometry",
            "Q            quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
    }

    fn draw_log(&self, fb: &mut FrameBuffer, log: &QuestLog, viewport: Viewport, x: u16, y: u16) {
        if y >= viewport.height {
            return;
        }
        let rows = self.log_rows.min(viewport.height - y) as usize;
        let style = CellStyle {
            fg: Rgb::new(0, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        for (i, entry) in log.latest(rows).enumerate() {
            fb.put_str(x, y + i as u16, &entry.to_string(), style);
        }
    }
}

/// Style of a map tile: highlighted for specials, shaded by distance in hyperbolic mode.
fn tile_style(snap: &WorldSnapshot, wx: i64, wy: i64, special: Option<SpecialTag>) -> CellStyle {
    let bg = match special {
        Some(SpecialTag::Cusp) => Rgb::new(150, 90, 0),
        Some(SpecialTag::Consciousness) => Rgb::new(0, 110, 60),
        Some(SpecialTag::Memory) => Rgb::new(90, 50, 150),
        None => Rgb::new(30, 30, 40),
    };
    let fg = Rgb::new(230, 230, 230);

    match snap.render_mode {
        RenderMode::Euclidean => CellStyle {
            fg,
            bg,
            bold: false,
            dim: false,
        },
        RenderMode::Hyperbolic => {
            let d = hyperbolic_distance(snap.position.x, snap.position.y, wx, wy);
            let scale = tile_scale(d);
            CellStyle {
                fg: fg.scaled(0.4 + 0.6 * scale),
                bg: bg.scaled(0.4 + 0.6 * scale),
                bold: false,
                dim: scale < 0.9,
            }
        }
    }
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
