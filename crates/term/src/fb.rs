//! Framebuffer and style types for terminal rendering.
//!
//! Emoji occupy two terminal columns. A wide glyph is stored in its first
//! column and the second column holds a [`Cell::TAIL`] marker, which encoders
//! skip.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by `factor` (clamped to `[0, 1]`).
    pub fn scaled(self, factor: f64) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f64 * f).round() as u8,
            g: (self.g as f64 * f).round() as u8,
            b: (self.b as f64 * f).round() as u8,
        }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

impl Cell {
    /// Second column of a wide glyph.
    pub const TAIL: char = '\0';

    pub fn is_tail(&self) -> bool {
        self.ch == Self::TAIL
    }
}

/// Terminal column width of a character: 0, 1 or 2.
///
/// A small table covering what this game prints (emoji, symbols, CJK);
/// anything else counts as one column.
pub fn char_width(ch: char) -> u16 {
    match ch as u32 {
        0 => 0,
        // Zero-width joiner, variation selectors, combining marks.
        0x200D | 0xFE00..=0xFE0F | 0x0300..=0x036F | 0x20D0..=0x20FF => 0,
        0x1100..=0x115F
        | 0x231A..=0x231B
        | 0x2600..=0x27BF
        | 0x2B50..=0x2B55
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFF00..=0xFF60
        | 0x1F000..=0x1FAFF => 2,
        _ => 1,
    }
}

/// Column width of a string, as [`FrameBuffer::put_str`] lays it out.
pub fn str_width(s: &str) -> u16 {
    s.chars().map(char_width).sum()
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Set one cell. Overwriting half of a wide glyph blanks the other half.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        let Some(i) = self.idx(x, y) else {
            return;
        };

        let old = self.cells[i];
        if old.is_tail() && !cell.is_tail() && x > 0 {
            self.cells[i - 1].ch = ' ';
        } else if !old.is_tail() && char_width(old.ch) == 2 && char_width(cell.ch) != 2 {
            if let Some(next) = self.idx(x + 1, y) {
                if self.cells[next].is_tail() {
                    self.cells[next].ch = ' ';
                }
            }
        }
        self.cells[i] = cell;
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Put a two-column glyph. Dropped if it would not fit on the row.
    pub fn put_wide(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if x.saturating_add(1) >= self.width {
            return;
        }
        self.put_char(x, y, ch, style);
        self.put_char(x + 1, y, Cell::TAIL, style);
    }

    /// Write a string starting at `(x, y)`, clipped at the right edge.
    ///
    /// Returns the column after the last written cell.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            match char_width(ch) {
                0 => continue,
                2 => {
                    if cx.saturating_add(2) > self.width {
                        break;
                    }
                    self.put_wide(cx, y, ch, style);
                    cx += 2;
                }
                _ => {
                    if cx >= self.width {
                        break;
                    }
                    self.put_char(cx, y, ch, style);
                    cx += 1;
                }
            }
        }
        cx
    }

    /// Write a decimal number without allocating.
    pub fn put_u64(&mut self, x: u16, y: u16, value: u64, style: CellStyle) -> u16 {
        let mut digits = [0u8; 20];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, d as char, style);
            cx += 1;
        }
        cx
    }

    /// Visible text of one row (wide-glyph tails skipped).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|c| !c.is_tail())
            .map(|c| c.ch)
            .collect()
    }

    /// Visible text of the whole buffer, one line per row.
    pub fn text(&self) -> String {
        let mut all = String::new();
        for y in 0..self.height {
            all.push_str(&self.row_text(y));
            all.push('\n');
        }
        all
    }
}
