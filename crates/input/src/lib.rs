//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`InputCommand`]s. Gameplay keys become
//! [`crate::types::GameAction`]s; the pacing keys only concern the host.

pub mod map;

pub use speedway_types as types;

pub use map::{handle_key_event, should_quit, InputCommand};
