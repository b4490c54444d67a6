//! Renderer: draws a [`GameSnapshot`] into a [`RasterImage`].
//!
//! This module is pure (no I/O). The output depends only on the snapshot and
//! the cell size, so it can be unit-tested pixel by pixel.

use crate::bitmap::{RasterImage, Rgb};
use crate::core::GameSnapshot;

/// Cell size at which decoration sizes below are given in pixels.
pub const REFERENCE_CELL_SIZE: u32 = 2;

pub mod palette {
    use super::Rgb;
    use crate::types::ObstacleKind;

    pub const BACKGROUND: Rgb = Rgb::from_hex(0x1a1a1a);
    pub const ROAD: Rgb = Rgb::from_hex(0x404040);
    pub const ROAD_LINE: Rgb = Rgb::from_hex(0xffffff);
    pub const PLAYER: Rgb = Rgb::from_hex(0x00ff00);
    pub const PLAYER_ACCENT: Rgb = Rgb::from_hex(0xffffff);
    pub const CAR: Rgb = Rgb::from_hex(0xff0000);
    pub const TRUCK: Rgb = Rgb::from_hex(0xff6600);
    pub const BARRIER: Rgb = Rgb::from_hex(0xffff00);
    pub const COIN: Rgb = Rgb::from_hex(0xffff00);

    pub fn obstacle(kind: ObstacleKind) -> Rgb {
        match kind {
            ObstacleKind::Car => CAR,
            ObstacleKind::Truck => TRUCK,
            ObstacleKind::Barrier => BARRIER,
        }
    }
}

// Decoration sizes in pixels at REFERENCE_CELL_SIZE.
const ROAD_LINE_WIDTH: i32 = 3;
const ROAD_LINE_LENGTH: i32 = 20;
const PLAYER_HALF_WIDTH: i32 = 15;
const PLAYER_HALF_HEIGHT: i32 = 20;
const ACCENT_HALF_WIDTH: i32 = 10;
const ACCENT_OUTER: i32 = 15;
const ACCENT_INNER: i32 = 5;

/// Stateless scene renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    /// World units per pixel.
    cell_size: u32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            cell_size: REFERENCE_CELL_SIZE,
        }
    }
}

impl Renderer {
    /// A `cell_size` of 0 is treated as 1.
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Output dimensions for a snapshot: playfield size divided by the cell size.
    pub fn output_size(&self, snap: &GameSnapshot) -> (u32, u32) {
        let cell = self.cell_size as i32;
        (
            (snap.width.max(0) / cell) as u32,
            (snap.height.max(0) / cell) as u32,
        )
    }

    /// Convenience helper that allocates a new image.
    pub fn render(&self, snap: &GameSnapshot) -> RasterImage {
        let (w, h) = self.output_size(snap);
        let mut img = RasterImage::new(w, h, palette::BACKGROUND);
        self.render_into(snap, &mut img);
        img
    }

    /// Render into an existing image, resizing it if needed.
    ///
    /// Draw order is background, road, road lines, player, obstacles, coins;
    /// later shapes cover earlier ones.
    pub fn render_into(&self, snap: &GameSnapshot, img: &mut RasterImage) {
        let (w, h) = self.output_size(snap);
        img.resize(w, h);
        img.fill(palette::BACKGROUND);

        let w = w as i32;
        let h = h as i32;
        let road_width = w / 3;
        let road_x = (w - road_width) / 2;
        img.fill_rect(road_x, 0, road_x + road_width, h, palette::ROAD);

        self.draw_road_lines(img, snap, road_x + road_width / 2, h);
        self.draw_player(img, snap);

        for o in &snap.obstacles {
            let ox = self.scale(o.x);
            let oy = self.scale_y(o.y);
            let half_w = self.scale(o.width) / 2;
            let half_h = self.scale(o.height) / 2;
            img.fill_rect(
                ox - half_w,
                oy - half_h,
                ox + half_w,
                oy + half_h,
                palette::obstacle(o.kind),
            );
        }

        for c in &snap.coins {
            let cx = self.scale(c.x);
            let cy = self.scale_y(c.y);
            let r = self.scale(c.size);
            img.fill_ellipse(cx - r, cy - r, cx + r, cy + r, palette::COIN);
        }
    }

    fn draw_road_lines(&self, img: &mut RasterImage, snap: &GameSnapshot, center_x: i32, h: i32) {
        let half = self.decoration(ROAD_LINE_WIDTH) / 2;
        let length = self.decoration(ROAD_LINE_LENGTH);
        for &line_y in &snap.road_lines {
            let y = self.scale_y(line_y);
            if y < 0 || y >= h {
                continue;
            }
            img.fill_rect(center_x - half, y, center_x + half, y + length, palette::ROAD_LINE);
        }
    }

    fn draw_player(&self, img: &mut RasterImage, snap: &GameSnapshot) {
        let px = self.scale(snap.player_x);
        let py = self.scale(snap.player_y);
        let hw = self.decoration(PLAYER_HALF_WIDTH);
        let hh = self.decoration(PLAYER_HALF_HEIGHT);
        img.fill_rect(px - hw, py - hh, px + hw, py + hh, palette::PLAYER);

        // Windshield and rear window.
        let aw = self.decoration(ACCENT_HALF_WIDTH);
        let outer = self.decoration(ACCENT_OUTER);
        let inner = self.decoration(ACCENT_INNER);
        img.fill_rect(px - aw, py - outer, px + aw, py - inner, palette::PLAYER_ACCENT);
        img.fill_rect(px - aw, py + inner, px + aw, py + outer, palette::PLAYER_ACCENT);
    }

    #[inline]
    fn scale(&self, v: i32) -> i32 {
        v.div_euclid(self.cell_size as i32)
    }

    #[inline]
    fn scale_y(&self, v: f64) -> i32 {
        (v / self.cell_size as f64).floor() as i32
    }

    /// Fixed decoration size, proportional to the reference scale.
    #[inline]
    fn decoration(&self, px: i32) -> i32 {
        (px * REFERENCE_CELL_SIZE as i32 / self.cell_size as i32).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coin, GameState, Obstacle, SequenceRng};
    use crate::types::ObstacleKind;

    fn snapshot() -> GameSnapshot {
        GameState::with_rng(400, 600, SequenceRng::never()).snapshot()
    }

    #[test]
    fn image_size_follows_cell_size() {
        let snap = snapshot();
        let img = Renderer::default().render(&snap);
        assert_eq!((img.width(), img.height()), (200, 300));

        let img = Renderer::new(8).render(&snap);
        assert_eq!((img.width(), img.height()), (50, 75));
    }

    #[test]
    fn zero_cell_size_renders_full_scale() {
        let r = Renderer::new(0);
        assert_eq!(r.cell_size(), 1);
        assert_eq!(r.output_size(&snapshot()), (400, 600));
    }

    #[test]
    fn background_and_road_band() {
        let img = Renderer::default().render(&snapshot());
        // road_width = 66, road_x = 67
        assert_eq!(img.get(0, 0), Some(palette::BACKGROUND));
        assert_eq!(img.get(66, 10), Some(palette::BACKGROUND));
        assert_eq!(img.get(67, 10), Some(palette::ROAD));
        assert_eq!(img.get(133, 10), Some(palette::ROAD));
        assert_eq!(img.get(134, 10), Some(palette::BACKGROUND));
    }

    #[test]
    fn road_lines_are_three_pixels_wide_at_road_center() {
        let img = Renderer::default().render(&snapshot());
        // Line at y=0 spans rows 0..=20 and columns 99..=101.
        assert_eq!(img.get(98, 0), Some(palette::ROAD));
        assert_eq!(img.get(99, 0), Some(palette::ROAD_LINE));
        assert_eq!(img.get(101, 20), Some(palette::ROAD_LINE));
        assert_eq!(img.get(102, 0), Some(palette::ROAD));
        assert_eq!(img.get(100, 22), Some(palette::ROAD));
    }

    #[test]
    fn off_screen_road_lines_are_skipped() {
        let mut snap = snapshot();
        snap.road_lines = vec![-50.0];
        let img = Renderer::default().render(&snap);
        // Only the two 21x11 player accents remain white.
        assert_eq!(img.count(palette::ROAD_LINE), 2 * 21 * 11);
    }

    #[test]
    fn player_body_and_accents() {
        let img = Renderer::default().render(&snapshot());
        // Player at (200, 500) -> (100, 250).
        assert_eq!(img.get(85, 230), Some(palette::PLAYER));
        assert_eq!(img.get(115, 270), Some(palette::PLAYER));
        assert_eq!(img.get(84, 250), Some(palette::ROAD));
        assert_eq!(img.get(100, 250), Some(palette::PLAYER));
        assert_eq!(img.get(100, 240), Some(palette::PLAYER_ACCENT));
        assert_eq!(img.get(100, 260), Some(palette::PLAYER_ACCENT));
    }

    #[test]
    fn obstacles_use_kind_colors() {
        let mut snap = snapshot();
        snap.obstacles = vec![
            Obstacle::new(100, 100.0, 40, 30, ObstacleKind::Car),
            Obstacle::new(200, 100.0, 40, 30, ObstacleKind::Truck),
            Obstacle::new(300, 100.0, 40, 30, ObstacleKind::Barrier),
        ];
        let img = Renderer::default().render(&snap);
        assert_eq!(img.get(50, 50), Some(palette::CAR));
        assert_eq!(img.get(100, 50), Some(palette::TRUCK));
        assert_eq!(img.get(150, 50), Some(palette::BARRIER));
        // 40x30 -> 20x15 px, integer halves 10 and 7.
        assert_eq!(img.get(40, 43), Some(palette::CAR));
        assert_eq!(img.get(60, 57), Some(palette::CAR));
        assert_eq!(img.get(39, 50), Some(palette::BACKGROUND));
    }

    #[test]
    fn coins_are_round_and_drawn_last() {
        let mut snap = snapshot();
        snap.obstacles = vec![Obstacle::new(300, 200.0, 60, 40, ObstacleKind::Car)];
        snap.coins = vec![Coin::new(300, 200.0, 10)];
        let img = Renderer::default().render(&snap);
        // Coin radius 5 px centered on (150, 100) covers the obstacle center.
        assert_eq!(img.get(150, 100), Some(palette::COIN));
        assert_eq!(img.get(145, 95), Some(palette::CAR));
    }

    #[test]
    fn player_occludes_road_lines() {
        let img = Renderer::default().render(&snapshot());
        // Line at y=500 lands at row 250, under the player body.
        assert_eq!(img.get(100, 252), Some(palette::PLAYER));
    }

    #[test]
    fn render_into_reuses_and_resizes() {
        let snap = snapshot();
        let mut img = RasterImage::new(1, 1, palette::CAR);
        Renderer::new(4).render_into(&snap, &mut img);
        assert_eq!(img, Renderer::new(4).render(&snap));
    }

    #[test]
    fn coarse_scale_keeps_decorations_visible() {
        let img = Renderer::new(40).render(&snapshot());
        // 10x15 image; player at (5, 12).
        assert_eq!(img.get(5, 12), Some(palette::PLAYER));
        assert!(img.count(palette::ROAD_LINE) > 0);
    }
}
