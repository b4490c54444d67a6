//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data with no behaviour beyond parsing and naming,
//! so it can be shared by the simulation, the rasterizer and any host surface.
//!
//! # Playfield
//!
//! The playfield is measured in world units (the rasterizer divides by a
//! caller-supplied cell size to obtain pixels):
//!
//! - **Width**: 400 units
//! - **Height**: 600 units
//! - **Lateral bounds**: the player stays within `[50, width - 50]`
//! - **Player row**: `height - 100`, fixed for the whole round
//!
//! # Scoring and difficulty
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `OBSTACLE_PASS_SCORE` | 10 | Obstacle scrolled past the bottom edge |
//! | `COIN_SCORE` | 50 | Coin collected |
//! | `LEVEL_SCORE_STEP` | 500 | Score per level (`level = score / 500 + 1`) |
//! | `OBSTACLE_SPEED_STEP` | 0.5 | Obstacle speed added on level-up |
//! | `COIN_SPEED_STEP` | 0.3 | Coin speed added on level-up |
//!
//! # Spawning
//!
//! Each tick rolls one Bernoulli trial per entity kind:
//!
//! | Entity | Chance | Spawn y | Extents |
//! |--------|--------|---------|---------|
//! | Obstacle | 0.02 | -50 | width 30..=60, height 20..=40 |
//! | Coin | 0.01 | -30 | size 8..=15 |
//!
//! # Examples
//!
//! ```
//! use speedway_types::{GameAction, ObstacleKind, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
//!
//! assert_eq!(ObstacleKind::from_str("Truck"), Some(ObstacleKind::Truck));
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(PLAYFIELD_WIDTH, 400);
//! assert_eq!(PLAYFIELD_HEIGHT, 600);
//! ```

use serde::{Deserialize, Serialize};

/// Default playfield width in world units
pub const PLAYFIELD_WIDTH: i32 = 400;

/// Default playfield height in world units
pub const PLAYFIELD_HEIGHT: i32 = 600;

/// Distance the player keeps from both side edges
pub const EDGE_MARGIN: i32 = 50;

/// Lateral distance covered by one move command
pub const MOVE_STEP: i32 = 5;

/// Player row, measured up from the bottom edge
pub const PLAYER_BOTTOM_OFFSET: i32 = 100;

/// Lives at the start of a round
pub const STARTING_LIVES: i32 = 3;

/// Player hitbox half-width, in world units
pub const PLAYER_HIT_HALF_WIDTH: i32 = 20;

/// Player hitbox half-height, in world units
pub const PLAYER_HIT_HALF_HEIGHT: i32 = 30;

/// Score for an obstacle leaving through the bottom edge
pub const OBSTACLE_PASS_SCORE: u32 = 10;

/// Score for a collected coin
pub const COIN_SCORE: u32 = 50;

/// Score needed per level
pub const LEVEL_SCORE_STEP: u32 = 500;

/// Obstacle (and road-line) scroll speed at level 1
pub const BASE_OBSTACLE_SPEED: f64 = 3.0;

/// Coin scroll speed at level 1
pub const BASE_COIN_SPEED: f64 = 2.0;

/// Obstacle speed added per level-up
pub const OBSTACLE_SPEED_STEP: f64 = 0.5;

/// Coin speed added per level-up
pub const COIN_SPEED_STEP: f64 = 0.3;

/// Per-tick obstacle spawn probability
pub const OBSTACLE_SPAWN_CHANCE: f64 = 0.02;

/// Per-tick coin spawn probability
pub const COIN_SPAWN_CHANCE: f64 = 0.01;

/// Vertical spawn position of new obstacles (above the visible area)
pub const OBSTACLE_SPAWN_Y: f64 = -50.0;

/// Vertical spawn position of new coins (above the visible area)
pub const COIN_SPAWN_Y: f64 = -30.0;

/// Obstacle width range (inclusive)
pub const OBSTACLE_WIDTH_RANGE: (i32, i32) = (30, 60);

/// Obstacle height range (inclusive)
pub const OBSTACLE_HEIGHT_RANGE: (i32, i32) = (20, 40);

/// Coin size (radius) range (inclusive)
pub const COIN_SIZE_RANGE: (i32, i32) = (8, 15);

/// Spacing between road lines at the start of a round
pub const ROAD_LINE_SPACING: i32 = 50;

/// Offset a road line wraps back to once it leaves the bottom edge
pub const ROAD_LINE_RESET_Y: f64 = -50.0;

/// Default host tick interval in milliseconds
pub const DEFAULT_TICK_MS: u32 = 100;

/// Fastest allowed host tick interval in milliseconds
pub const MIN_TICK_MS: u32 = 50;

/// Slowest allowed host tick interval in milliseconds
pub const MAX_TICK_MS: u32 = 200;

/// Tick interval adjustment per faster/slower command
pub const TICK_MS_STEP: u32 = 10;


/// Lateral movement direction of the player car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Signed x offset of one move in this direction
    pub fn dx(&self) -> i32 {
        match self {
            Direction::Left => -MOVE_STEP,
            Direction::Right => MOVE_STEP,
        }
    }
}

/// The three obstacle variants
///
/// The kind only affects the render color:
/// - **Car**: red
/// - **Truck**: orange
/// - **Barrier**: yellow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    Car,
    Truck,
    Barrier,
}

impl ObstacleKind {
    /// All kinds, in the order the spawner picks from
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Car, ObstacleKind::Truck, ObstacleKind::Barrier];

    /// Parse obstacle kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use speedway_types::ObstacleKind;
    ///
    /// assert_eq!(ObstacleKind::from_str("car"), Some(ObstacleKind::Car));
    /// assert_eq!(ObstacleKind::from_str("Truck"), Some(ObstacleKind::Truck));
    /// assert_eq!(ObstacleKind::from_str("cone"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "car" => Some(ObstacleKind::Car),
            "truck" => Some(ObstacleKind::Truck),
            "barrier" => Some(ObstacleKind::Barrier),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Car => "car",
            ObstacleKind::Truck => "truck",
            ObstacleKind::Barrier => "barrier",
        }
    }
}

/// Commands a host can send to a running game
///
/// These cover the whole host vocabulary: the two direction commands, the
/// pause/resume toggle and the reset trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Shift the player car one step left
    MoveLeft,
    /// Shift the player car one step right
    MoveRight,
    /// Toggle pause state
    Pause,
    /// Start a fresh round
    Reset,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use speedway_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("reset"), Some(GameAction::Reset));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "pause" => Some(GameAction::Pause),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Pause => "pause",
            GameAction::Reset => "reset",
        }
    }

    /// Direction carried by a move action
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}
