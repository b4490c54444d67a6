//! Game state module - manages the complete state of one round
//!
//! This module ties together the entities, the random source and the scoring
//! rules. It handles player movement, the per-tick update (scrolling,
//! spawning, collisions, difficulty) and the round lifecycle.

use log::{debug, trace};

use crate::entities::{Aabb, Coin, Obstacle};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{GameSnapshot, ObstacleTally};
use crate::types::*;

/// What happened during one call to [`GameState::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Obstacles that scrolled past the bottom edge
    pub passed: u32,
    /// Coins picked up
    pub collected: u32,
    /// Obstacles that hit the player
    pub hits: u32,
    pub leveled_up: bool,
    /// The round ended during this tick
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState<R = SimpleRng> {
    width: i32,
    height: i32,
    player_x: i32,
    player_y: i32,
    player_lives: i32,
    score: u32,
    level: u32,
    game_over: bool,
    paused: bool,
    obstacle_speed: f64,
    coin_speed: f64,
    obstacles: Vec<Obstacle>,
    coins: Vec<Coin>,
    /// Vertical offsets of the dashed center line, for scroll animation only.
    road_lines: Vec<f64>,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game on the default 400x600 playfield with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT, SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game with explicit playfield bounds and random source
    pub fn with_rng(width: i32, height: i32, rng: R) -> Self {
        let mut state = Self {
            width,
            height,
            player_x: 0,
            player_y: 0,
            player_lives: 0,
            score: 0,
            level: 0,
            game_over: false,
            paused: false,
            obstacle_speed: 0.0,
            coin_speed: 0.0,
            obstacles: Vec::new(),
            coins: Vec::new(),
            road_lines: Vec::new(),
            rng,
        };
        state.reset();
        state
    }

    /// Restore every field to its start-of-round value.
    ///
    /// The playfield bounds and the random source are kept; the source keeps
    /// advancing, so consecutive rounds differ.
    pub fn reset(&mut self) {
        self.player_x = self.width / 2;
        self.player_y = self.height - PLAYER_BOTTOM_OFFSET;
        self.player_lives = STARTING_LIVES;
        self.score = 0;
        self.level = 1;
        self.game_over = false;
        self.paused = false;
        self.obstacle_speed = BASE_OBSTACLE_SPEED;
        self.coin_speed = BASE_COIN_SPEED;
        self.obstacles.clear();
        self.coins.clear();
        self.road_lines.clear();
        self.road_lines.extend(
            (0..self.height)
                .step_by(ROAD_LINE_SPACING as usize)
                .map(|y| y as f64),
        );
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn player_x(&self) -> i32 {
        self.player_x
    }

    pub fn player_y(&self) -> i32 {
        self.player_y
    }

    pub fn player_lives(&self) -> i32 {
        self.player_lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn obstacle_speed(&self) -> f64 {
        self.obstacle_speed
    }

    pub fn coin_speed(&self) -> f64 {
        self.coin_speed
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn road_lines(&self) -> &[f64] {
        &self.road_lines
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn obstacle_counts(&self) -> ObstacleTally {
        ObstacleTally::from_obstacles(&self.obstacles)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.width;
        out.height = self.height;
        out.player_x = self.player_x;
        out.player_y = self.player_y;
        out.player_lives = self.player_lives;
        out.score = self.score;
        out.level = self.level;
        out.game_over = self.game_over;
        out.paused = self.paused;
        out.obstacle_speed = self.obstacle_speed;
        out.coin_speed = self.coin_speed;
        out.obstacles.clear();
        out.obstacles.extend_from_slice(&self.obstacles);
        out.coins.clear();
        out.coins.extend_from_slice(&self.coins);
        out.road_lines.clear();
        out.road_lines.extend_from_slice(&self.road_lines);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Place an obstacle directly, bypassing the spawn policy.
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Place a coin directly, bypassing the spawn policy.
    pub fn insert_coin(&mut self, coin: Coin) {
        self.coins.push(coin);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    /// Shift the player one step.
    ///
    /// Returns false (and leaves the state untouched) when the step would
    /// leave `[EDGE_MARGIN, width - EDGE_MARGIN]`. Movement is accepted while
    /// paused or after game over.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let next = self.player_x + direction.dx();
        if next < EDGE_MARGIN || next > self.width - EDGE_MARGIN {
            return false;
        }
        self.player_x = next;
        true
    }

    /// Apply a host command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft | GameAction::MoveRight => action
                .direction()
                .is_some_and(|direction| self.move_player(direction)),
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Player hitbox, 40x60 world units centered on the player.
    pub fn player_bounds(&self) -> Aabb {
        Aabb::centered(
            self.player_x as f64,
            self.player_y as f64,
            PLAYER_HIT_HALF_WIDTH as f64,
            PLAYER_HIT_HALF_HEIGHT as f64,
        )
    }

    /// Advance the simulation by one tick.
    ///
    /// No-op while paused or after game over; nothing (including the random
    /// source) is touched in that case.
    pub fn update(&mut self) -> TickReport {
        if self.game_over || self.paused {
            return TickReport::default();
        }

        let mut report = TickReport {
            passed: self.advance_obstacles(),
            ..TickReport::default()
        };
        self.spawn_obstacle();
        self.advance_coins();
        self.spawn_coin();
        self.scroll_road_lines();

        let (hits, collected) = self.resolve_collisions();
        report.hits = hits;
        report.collected = collected;
        report.game_over = self.game_over;

        report.leveled_up = self.update_level();
        report
    }

    fn advance_obstacles(&mut self) -> u32 {
        let speed = self.obstacle_speed;
        let bottom = self.height as f64;
        let mut passed = 0u32;
        self.obstacles.retain_mut(|o| {
            o.y += speed;
            if o.y > bottom {
                passed += 1;
                false
            } else {
                true
            }
        });
        self.score += passed * OBSTACLE_PASS_SCORE;
        passed
    }

    fn spawn_obstacle(&mut self) {
        if !self.rng.chance(OBSTACLE_SPAWN_CHANCE) {
            return;
        }
        let x = self
            .rng
            .range_inclusive(EDGE_MARGIN, self.width - EDGE_MARGIN);
        let width = self
            .rng
            .range_inclusive(OBSTACLE_WIDTH_RANGE.0, OBSTACLE_WIDTH_RANGE.1);
        let height = self
            .rng
            .range_inclusive(OBSTACLE_HEIGHT_RANGE.0, OBSTACLE_HEIGHT_RANGE.1);
        let kind = ObstacleKind::ALL[self.rng.index(ObstacleKind::ALL.len())];

        trace!("spawned {} at x={} ({}x{})", kind.as_str(), x, width, height);
        self.obstacles
            .push(Obstacle::new(x, OBSTACLE_SPAWN_Y, width, height, kind));
    }

    fn advance_coins(&mut self) {
        let speed = self.coin_speed;
        let bottom = self.height as f64;
        self.coins.retain_mut(|c| {
            c.y += speed;
            c.y <= bottom
        });
    }

    fn spawn_coin(&mut self) {
        if !self.rng.chance(COIN_SPAWN_CHANCE) {
            return;
        }
        let x = self
            .rng
            .range_inclusive(EDGE_MARGIN, self.width - EDGE_MARGIN);
        let size = self.rng.range_inclusive(COIN_SIZE_RANGE.0, COIN_SIZE_RANGE.1);

        trace!("spawned coin at x={} (size {})", x, size);
        self.coins.push(Coin::new(x, COIN_SPAWN_Y, size));
    }

    fn scroll_road_lines(&mut self) {
        let speed = self.obstacle_speed;
        let bottom = self.height as f64;
        for line in self.road_lines.iter_mut() {
            *line += speed;
            if *line > bottom {
                *line = ROAD_LINE_RESET_Y;
            }
        }
    }

    /// Returns `(obstacle hits, coins collected)`.
    fn resolve_collisions(&mut self) -> (u32, u32) {
        let player = self.player_bounds();

        let mut hits = 0u32;
        self.obstacles.retain(|o| {
            if player.overlaps(&o.bounds()) {
                hits += 1;
                false
            } else {
                true
            }
        });
        if hits > 0 {
            self.player_lives -= hits as i32;
            if self.player_lives <= 0 && !self.game_over {
                self.game_over = true;
                debug!("game over at score {}", self.score);
            }
        }

        let mut collected = 0u32;
        self.coins.retain(|c| {
            if player.overlaps(&c.bounds()) {
                collected += 1;
                false
            } else {
                true
            }
        });
        self.score += collected * COIN_SCORE;

        (hits, collected)
    }

    /// Raise the level when the score crosses a threshold.
    ///
    /// At most one speed step per call, even if several thresholds were
    /// crossed at once.
    fn update_level(&mut self) -> bool {
        let new_level = self.score / LEVEL_SCORE_STEP + 1;
        if new_level <= self.level {
            return false;
        }
        self.level = new_level;
        self.obstacle_speed += OBSTACLE_SPEED_STEP;
        self.coin_speed += COIN_SPEED_STEP;
        debug!(
            "level {} (obstacle speed {:.1}, coin speed {:.1})",
            self.level, self.obstacle_speed, self.coin_speed
        );
        true
    }
}
