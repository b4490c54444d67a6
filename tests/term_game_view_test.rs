//! Integration tests for the terminal view driven by a live session

use speedway::engine::Session;
use speedway::term::{
    encode_diff_into, encode_full_into, GameView, TermBuffer, Viewport, HALF_BLOCK,
};
use speedway::types::GameAction;

fn screen_text(fb: &TermBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).unwrap().ch);
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_session_frame_shows_hud() {
    let mut session = Session::new(4, 100);
    let mut view = GameView::default();
    let stats = session.stats();
    let fb = view.render(session.snapshot(), &stats, Viewport::new(100, 40));

    let text = screen_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("ON ROAD"));
    assert!(text.contains(HALF_BLOCK));
}

#[test]
fn test_pause_overlay_from_session() {
    let mut session = Session::new(4, 100);
    session.apply(GameAction::Pause);
    let mut view = GameView::default();
    let stats = session.stats();
    let fb = view.render(session.snapshot(), &stats, Viewport::new(100, 40));

    let text = screen_text(&fb);
    assert!(text.contains("PAUSED"));
    assert!(text.contains("paused"));
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let mut session = Session::new(4, 100);
    let mut view = GameView::default();
    let stats = session.stats();
    for (w, h) in [(0, 0), (1, 1), (10, 3), (52, 40)] {
        let fb = view.render(session.snapshot(), &stats, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}

#[test]
fn test_consecutive_frames_encode_small_diffs() {
    let mut session = Session::new(4, 100);
    let mut view = GameView::default();
    let viewport = Viewport::new(100, 40);

    let stats = session.stats();
    let first = view.render(session.snapshot(), &stats, viewport);
    session.apply(GameAction::MoveLeft);
    let stats = session.stats();
    let second = view.render(session.snapshot(), &stats, viewport);

    let mut full = Vec::new();
    encode_full_into(&second, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&first, &second, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len());
}
