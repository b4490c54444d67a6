//! GameView: maps a game snapshot into a terminal buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::engine::SessionStats;
use crate::fb::{TermBuffer, TermCell, DEFAULT_BG};
use crate::raster::{palette, RasterImage, Renderer, Rgb};
use crate::types::ObstacleKind;

/// Default world units per pixel for terminal play.
pub const TERMINAL_CELL_SIZE: u32 = 8;

/// Narrowest side panel worth drawing.
const MIN_PANEL_WIDTH: u16 = 12;

const BORDER: Rgb = Rgb::new(200, 200, 200);
const LABEL: Rgb = Rgb::new(220, 220, 220);
const VALUE: Rgb = Rgb::new(200, 200, 200);
const DIM: Rgb = Rgb::new(120, 120, 120);
const OVERLAY: Rgb = Rgb::new(255, 255, 255);

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

/// Terminal layout: the rasterized playfield in a frame, with a side panel.
///
/// Holds its raster scratch image so repeated frames do not allocate.
#[derive(Debug)]
pub struct GameView {
    renderer: Renderer,
    image: RasterImage,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(TERMINAL_CELL_SIZE)
    }
}

impl GameView {
    pub fn new(cell_size: u32) -> Self {
        Self {
            renderer: Renderer::new(cell_size),
            image: RasterImage::new(0, 0, palette::BACKGROUND),
        }
    }

    pub fn cell_size(&self) -> u32 {
        self.renderer.cell_size()
    }

    /// Frame size in cells (raster plus a one-cell border).
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let (w, h) = self.renderer.output_size(snap);
        let cols = w.min(u16::MAX as u32 - 2) as u16;
        let rows = h.div_ceil(2).min(u16::MAX as u32 - 2) as u16;
        (cols + 2, rows + 2)
    }

    /// Render into an existing buffer, resizing it to the viewport.
    pub fn render_into(
        &mut self,
        snap: &GameSnapshot,
        stats: &SessionStats,
        viewport: Viewport,
        fb: &mut TermBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TermCell::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.renderer.render_into(snap, &mut self.image);
        fb.blit_raster(start_x + 1, start_y + 1, &self.image);
        draw_border(fb, start_x, start_y, frame_w, frame_h);

        self.draw_side_panel(fb, snap, stats, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snap.paused {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new buffer.
    pub fn render(
        &mut self,
        snap: &GameSnapshot,
        stats: &SessionStats,
        viewport: Viewport,
    ) -> TermBuffer {
        let mut fb = TermBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, stats, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut TermBuffer,
        snap: &GameSnapshot,
        stats: &SessionStats,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < MIN_PANEL_WIDTH {
            return;
        }

        let label = TermCell::text(' ', LABEL, true);
        let value = TermCell::text(' ', VALUE, false);
        let dim = TermCell::text(' ', DIM, false);

        let mut y = start_y;
        let counter = |fb: &mut TermBuffer, y: &mut u16, name: &str, v: i64| {
            fb.put_str(panel_x, *y, name, label);
            fb.put_int(panel_x, *y + 1, v, value);
            *y += 3;
        };
        counter(fb, &mut y, "SCORE", snap.score as i64);
        counter(fb, &mut y, "HIGH", stats.high_score as i64);
        counter(fb, &mut y, "LEVEL", snap.level as i64);
        counter(fb, &mut y, "LIVES", snap.player_lives as i64);

        fb.put_str(panel_x, y, "SPEED", label);
        y += 1;
        fb.put_str(panel_x, y, "obs", dim);
        fb.put_tenths(panel_x + 6, y, snap.obstacle_speed, value);
        y += 1;
        fb.put_str(panel_x, y, "coin", dim);
        fb.put_tenths(panel_x + 6, y, snap.coin_speed, value);
        y += 1;
        fb.put_str(panel_x, y, "tick", dim);
        let w = fb.put_int(panel_x + 6, y, stats.tick_ms as i64, value);
        fb.put_str(panel_x + 6 + w, y, "ms", dim);
        y += 2;

        fb.put_str(panel_x, y, "ON ROAD", label);
        y += 1;
        let tally = snap.obstacle_tally();
        for kind in ObstacleKind::ALL {
            let style = TermCell {
                fg: palette::obstacle(kind),
                ..value
            };
            fb.put_str(panel_x, y, kind.as_str(), style);
            fb.put_int(panel_x + 8, y, tally.get(kind) as i64, value);
            y += 1;
        }
        let coin = TermCell {
            fg: palette::COIN,
            ..value
        };
        fb.put_str(panel_x, y, "coin", coin);
        fb.put_int(panel_x + 8, y, snap.coins.len() as i64, value);
        y += 2;

        fb.put_str(panel_x, y, "ROUND", label);
        fb.put_int(panel_x + 6, y, stats.round as i64, value);
        y += 1;
        fb.put_str(panel_x, y, stats.status.as_str(), value);
        y += 2;

        for help in ["←→ move", "p pause", "r reset", "+- speed", "q quit"] {
            fb.put_str(panel_x, y, help, dim);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut TermBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let line = |ch| TermCell::text(ch, BORDER, false);

    fb.set(x, y, line('┌'));
    fb.set(x + w - 1, y, line('┐'));
    fb.set(x, y + h - 1, line('└'));
    fb.set(x + w - 1, y + h - 1, line('┘'));

    for dx in 1..w - 1 {
        fb.set(x + dx, y, line('─'));
        fb.set(x + dx, y + h - 1, line('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, line('│'));
        fb.set(x + w - 1, y + dy, line('│'));
    }
}

fn draw_overlay_text(
    fb: &mut TermBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = TermCell {
        ch: ' ',
        fg: OVERLAY,
        bg: DEFAULT_BG,
        bold: true,
    };
    fb.put_str(x, mid_y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Obstacle, SequenceRng};
    use crate::engine::SessionStatus;
    use crate::fb::HALF_BLOCK;

    fn stats() -> SessionStats {
        SessionStats {
            score: 0,
            high_score: 120,
            level: 1,
            lives: 3,
            round: 1,
            tick_ms: 100,
            status: SessionStatus::Running,
        }
    }

    fn snapshot() -> GameSnapshot {
        GameState::with_rng(400, 600, SequenceRng::never()).snapshot()
    }

    fn row_text(fb: &TermBuffer, y: u16) -> String {
        (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
    }

    fn screen_contains(fb: &TermBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| row_text(fb, y).contains(needle))
    }

    #[test]
    fn frame_size_uses_half_blocks() {
        let view = GameView::default();
        // 50x75 px -> 50 cols, 38 rows, plus border.
        assert_eq!(view.frame_size(&snapshot()), (52, 40));
    }

    #[test]
    fn playfield_is_framed_and_centered() {
        let mut view = GameView::default();
        let fb = view.render(&snapshot(), &stats(), Viewport::new(100, 40));
        // start_x = (100 - 52) / 2 = 24
        assert_eq!(fb.get(24, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(75, 39).unwrap().ch, '┘');
        let inner = fb.get(25, 1).unwrap();
        assert_eq!(inner.ch, HALF_BLOCK);
        assert_eq!(inner.fg, palette::BACKGROUND);
    }

    #[test]
    fn side_panel_shows_scores() {
        let mut view = GameView::default();
        let fb = view.render(&snapshot(), &stats(), Viewport::new(100, 40));
        assert!(screen_contains(&fb, "SCORE"));
        assert!(screen_contains(&fb, "HIGH"));
        assert!(screen_contains(&fb, "120"));
        assert!(screen_contains(&fb, "LIVES"));
        assert!(screen_contains(&fb, "3.0"));
        assert!(screen_contains(&fb, "running"));
    }

    #[test]
    fn narrow_viewport_skips_side_panel() {
        let mut view = GameView::default();
        let fb = view.render(&snapshot(), &stats(), Viewport::new(60, 40));
        assert!(!screen_contains(&fb, "SCORE"));
    }

    #[test]
    fn tally_lists_obstacles_on_road() {
        let mut snap = snapshot();
        snap.obstacles = vec![
            Obstacle::new(100, 100.0, 40, 30, ObstacleKind::Truck),
            Obstacle::new(300, 100.0, 40, 30, ObstacleKind::Truck),
        ];
        let mut view = GameView::default();
        let fb = view.render(&snap, &stats(), Viewport::new(100, 40));
        assert!(screen_contains(&fb, "truck   2"));
        assert!(screen_contains(&fb, "car     0"));
    }

    #[test]
    fn overlays_follow_round_state() {
        let mut view = GameView::default();
        let mut snap = snapshot();
        snap.paused = true;
        let fb = view.render(&snap, &stats(), Viewport::new(100, 40));
        assert!(screen_contains(&fb, "PAUSED"));

        snap.game_over = true;
        let fb = view.render(&snap, &stats(), Viewport::new(100, 40));
        assert!(screen_contains(&fb, "GAME OVER"));
        assert!(!screen_contains(&fb, "PAUSED"));
    }

    #[test]
    fn render_into_matches_render() {
        let snap = snapshot();
        let mut view = GameView::default();
        let expected = view.render(&snap, &stats(), Viewport::new(90, 45));
        let mut fb = TermBuffer::new(1, 1);
        view.render_into(&snap, &stats(), Viewport::new(90, 45), &mut fb);
        assert_eq!(fb, expected);
    }
}
