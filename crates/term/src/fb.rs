//! Character-cell buffer for terminal rendering.

use crate::raster::{RasterImage, Rgb};

/// Upper half block; fg paints the top pixel, bg the bottom one.
pub const HALF_BLOCK: char = '▀';

pub const DEFAULT_FG: Rgb = Rgb::new(220, 220, 220);
pub const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

/// A single styled terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermCell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for TermCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: DEFAULT_FG,
            bg: DEFAULT_BG,
            bold: false,
        }
    }
}

impl TermCell {
    pub const fn text(ch: char, fg: Rgb, bold: bool) -> Self {
        Self {
            ch,
            fg,
            bg: DEFAULT_BG,
            bold,
        }
    }
}

/// 2D buffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermBuffer {
    width: u16,
    height: u16,
    cells: Vec<TermCell>,
}

impl TermBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![TermCell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the buffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, TermCell::default());
    }

    pub fn cells(&self) -> &[TermCell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<TermCell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: TermCell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: TermCell) {
        self.cells.fill(cell);
    }

    /// Write `s` left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: TermCell) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, TermCell { ch, ..style });
            cx += 1;
        }
    }

    /// Write a decimal integer without allocating. Returns the width written.
    pub fn put_int(&mut self, x: u16, y: u16, value: i64, style: TermCell) -> u16 {
        let mut digits = [0u8; 20];
        let mut n = value.unsigned_abs();
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
        if value < 0 {
            self.set(cx, y, TermCell { ch: '-', ..style });
            cx = cx.saturating_add(1);
        }
        for &d in digits[..len].iter().rev() {
            self.set(cx, y, TermCell { ch: d as char, ..style });
            cx = cx.saturating_add(1);
        }
        cx - x
    }

    /// Write a non-negative value with one decimal place, e.g. `3.5`.
    pub fn put_tenths(&mut self, x: u16, y: u16, value: f64, style: TermCell) -> u16 {
        let tenths = (value.max(0.0) * 10.0).round() as i64;
        let w = self.put_int(x, y, tenths / 10, style);
        self.set(x.saturating_add(w), y, TermCell { ch: '.', ..style });
        let frac = TermCell {
            ch: (b'0' + (tenths % 10) as u8) as char,
            ..style
        };
        self.set(x.saturating_add(w + 1), y, frac);
        w + 2
    }

    /// Copy `img` with its top-left pixel at cell `(x, y)`.
    ///
    /// Two pixel rows share one cell row via [`HALF_BLOCK`]. An odd last
    /// pixel row is paired with [`DEFAULT_BG`]. Cells outside the buffer are
    /// clipped. Returns the covered size in cells.
    pub fn blit_raster(&mut self, x: u16, y: u16, img: &RasterImage) -> (u16, u16) {
        let cols = img.width().min(u16::MAX as u32) as u16;
        let rows = img.height().div_ceil(2).min(u16::MAX as u32) as u16;
        for row in 0..rows {
            let cy = y.saturating_add(row);
            if cy >= self.height {
                break;
            }
            let top_y = (row as i32) * 2;
            for col in 0..cols {
                let cx = x.saturating_add(col);
                if cx >= self.width {
                    break;
                }
                let top = img.get(col as i32, top_y).unwrap_or(DEFAULT_BG);
                let bottom = img.get(col as i32, top_y + 1).unwrap_or(DEFAULT_BG);
                self.set(
                    cx,
                    cy,
                    TermCell {
                        ch: HALF_BLOCK,
                        fg: top,
                        bg: bottom,
                        bold: false,
                    },
                );
            }
        }
        (cols, rows)
    }
}
