//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management and simulation
//! logic. It has **no dependencies** on UI, rendering or I/O, making it:
//!
//! - **Deterministic**: the same seed (or scripted draw list) replays the same round
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: a host drives it from a terminal, a web page or a test harness
//!
//! # Module Structure
//!
//! - [`entities`]: obstacles, coins and axis-aligned bounding boxes
//! - [`game_state`]: the round state and the per-tick update
//! - [`rng`]: injectable random sources for the spawn policy
//! - [`snapshot`]: read-only copies of a round for rendering and telemetry
//!
//! # Game Rules
//!
//! Each call to [`GameState::update`](game_state::GameState::update) runs, in order:
//!
//! 1. **Advance obstacles**: scroll down; leaving the bottom edge awards 10 points
//! 2. **Spawn obstacles**: 2% chance of a new car, truck or barrier
//! 3. **Advance coins**: scroll down; leaving the bottom edge awards nothing
//! 4. **Spawn coins**: 1% chance of a new coin
//! 5. **Scroll road lines**: wrap back to -50 after the bottom edge
//! 6. **Collisions**: each obstacle hit costs one life, each coin is worth 50
//! 7. **Difficulty**: `level = score / 500 + 1`, one speed step per level-up call
//!
//! # Example
//!
//! ```
//! use speedway_core::GameState;
//! use speedway_types::Direction;
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.player_x(), 200);
//!
//! game.move_player(Direction::Left);
//! assert_eq!(game.player_x(), 195);
//!
//! game.update();
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! The core has no clock. The host decides how often to call `update()`
//! (see the `engine` crate for a pacer driven by elapsed milliseconds).

pub mod entities;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use speedway_types as types;

// Re-export commonly used types for convenience
pub use entities::{Aabb, Coin, Obstacle};
pub use game_state::{GameState, TickReport};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use snapshot::{GameSnapshot, ObstacleTally};
