//! Session: one player's game, owned by the host connection.
//!
//! The host creates a `Session` when a player connects and drops it when the
//! player leaves. Everything that must survive a round reset (high score,
//! pacing, round counter) lives here; everything that belongs to a round
//! lives in the [`GameState`].

use log::{debug, info};

use crate::core::{GameSnapshot, GameState, RandomSource, SimpleRng, TickReport};
use crate::pacer::TickPacer;
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Paused,
    GameOver,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Running => "running",
            SessionStatus::Paused => "paused",
            SessionStatus::GameOver => "game over",
        }
    }
}

/// Headline numbers for a HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub lives: i32,
    pub round: u32,
    pub tick_ms: u32,
    pub status: SessionStatus,
}

#[derive(Debug)]
pub struct Session<R: RandomSource = SimpleRng> {
    state: GameState<R>,
    pacer: TickPacer,
    high_score: u32,
    /// 1-based; incremented on every reset.
    round: u32,
    snapshot: GameSnapshot,
}

impl Session<SimpleRng> {
    /// Start a session on the default playfield.
    pub fn new(seed: u32, tick_ms: u32) -> Self {
        info!("session started (seed {})", seed);
        Self::with_state(GameState::new(seed), tick_ms)
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_state(state: GameState<R>, tick_ms: u32) -> Self {
        let mut session = Self {
            state,
            pacer: TickPacer::new(tick_ms),
            high_score: 0,
            round: 1,
            snapshot: GameSnapshot::default(),
        };
        session.record_high_score();
        session
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn pacer(&self) -> &TickPacer {
        &self.pacer
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn status(&self) -> SessionStatus {
        if self.state.game_over() {
            SessionStatus::GameOver
        } else if self.state.paused() {
            SessionStatus::Paused
        } else {
            SessionStatus::Running
        }
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            score: self.state.score(),
            high_score: self.high_score,
            level: self.state.level(),
            lives: self.state.player_lives(),
            round: self.round,
            tick_ms: self.pacer.interval_ms(),
            status: self.status(),
        }
    }

    /// Refresh and borrow the session's snapshot buffer.
    pub fn snapshot(&mut self) -> &GameSnapshot {
        self.state.snapshot_into(&mut self.snapshot);
        &self.snapshot
    }

    /// Route a host command to the round.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::Pause => {
                self.state.toggle_pause();
                debug!("paused: {}", self.state.paused());
                true
            }
            GameAction::MoveLeft | GameAction::MoveRight => self.state.apply_action(action),
        }
    }

    /// Replace the current round with a fresh one.
    pub fn reset(&mut self) {
        info!(
            "round {} reset at score {} (high score {})",
            self.round,
            self.state.score(),
            self.high_score
        );
        self.state.reset();
        self.pacer.reset();
        self.round += 1;
    }

    pub fn faster(&mut self) -> u32 {
        let ms = self.pacer.faster();
        debug!("tick interval {} ms", ms);
        ms
    }

    pub fn slower(&mut self) -> u32 {
        let ms = self.pacer.slower();
        debug!("tick interval {} ms", ms);
        ms
    }

    /// Report elapsed host time; runs one tick when one is due.
    ///
    /// Returns `None` when no tick ran (not due yet, paused, or game over).
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<TickReport> {
        if self.state.paused() || self.state.game_over() {
            return None;
        }
        if !self.pacer.advance(elapsed_ms) {
            return None;
        }
        Some(self.step())
    }

    /// Run exactly one tick, ignoring the pacer.
    pub fn step(&mut self) -> TickReport {
        let report = self.state.update();
        self.record_high_score();
        if report.leveled_up {
            info!("round {}: level {}", self.round, self.state.level());
        }
        if report.game_over {
            info!(
                "round {} over: score {}, high score {}",
                self.round,
                self.state.score(),
                self.high_score
            );
        }
        report
    }

    fn record_high_score(&mut self) {
        self.high_score = self.high_score.max(self.state.score());
    }
}

impl<R: RandomSource> Drop for Session<R> {
    fn drop(&mut self) {
        info!(
            "session closed after {} round(s), high score {}",
            self.round, self.high_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coin, Obstacle, SequenceRng};
    use crate::types::ObstacleKind;

    fn quiet_session() -> Session<SequenceRng> {
        Session::with_state(GameState::with_rng(400, 600, SequenceRng::never()), 100)
    }

    fn scoring_session() -> Session<SequenceRng> {
        let mut state = GameState::with_rng(400, 600, SequenceRng::never());
        state.insert_coin(Coin::new(200, 498.0, 10));
        Session::with_state(state, 100)
    }

    #[test]
    fn advance_waits_for_the_interval() {
        let mut session = scoring_session();
        assert!(session.advance(50).is_none());
        assert_eq!(session.state().score(), 0);

        let report = session.advance(50).unwrap();
        assert_eq!(report.collected, 1);
        assert_eq!(session.state().score(), 50);
    }

    #[test]
    fn high_score_survives_reset() {
        let mut session = scoring_session();
        session.step();
        assert_eq!(session.high_score(), 50);

        assert!(session.apply(GameAction::Reset));
        assert_eq!(session.state().score(), 0);
        assert_eq!(session.high_score(), 50);
        assert_eq!(session.round(), 2);
    }

    #[test]
    fn paused_session_does_not_tick() {
        let mut session = scoring_session();
        session.apply(GameAction::Pause);
        assert_eq!(session.status(), SessionStatus::Paused);
        assert!(session.advance(1_000).is_none());
        assert_eq!(session.state().coins().len(), 1);

        session.apply(GameAction::Pause);
        assert!(session.advance(100).is_some());
    }

    #[test]
    fn game_over_stops_ticks_until_reset() {
        let mut state = GameState::with_rng(400, 600, SequenceRng::never());
        for dx in [-10, 0, 10] {
            state.insert_obstacle(Obstacle::new(200 + dx, 497.0, 40, 30, ObstacleKind::Car));
        }
        let mut session = Session::with_state(state, 100);

        let report = session.step();
        assert!(report.game_over);
        assert_eq!(session.status(), SessionStatus::GameOver);
        assert!(session.advance(1_000).is_none());

        session.apply(GameAction::Reset);
        assert_eq!(session.status(), SessionStatus::Running);
        assert_eq!(session.stats().lives, 3);
    }

    #[test]
    fn moves_reach_the_round() {
        let mut session = quiet_session();
        assert!(session.apply(GameAction::MoveLeft));
        assert_eq!(session.state().player_x(), 195);
    }

    #[test]
    fn tick_interval_commands_adjust_pacer() {
        let mut session = quiet_session();
        assert_eq!(session.faster(), 90);
        assert_eq!(session.slower(), 100);
        assert_eq!(session.stats().tick_ms, 100);
    }

    #[test]
    fn snapshot_tracks_state() {
        let mut session = quiet_session();
        session.apply(GameAction::MoveRight);
        assert_eq!(session.snapshot().player_x, 205);
        session.step();
        assert_eq!(session.snapshot().road_lines[0], 3.0);
    }
}
