//! Engine: host-side lifecycle around a single round.
//!
//! - [`Session`] owns one [`GameState`](speedway_core::GameState) per
//!   connected player and keeps the high score across resets
//! - [`TickPacer`] turns elapsed host time into "tick now" decisions
//!
//! ```
//! use speedway_engine::Session;
//! use speedway_types::GameAction;
//!
//! let mut session = Session::new(7, 100);
//! session.apply(GameAction::MoveRight);
//! assert!(session.advance(40).is_none());
//! assert!(session.advance(60).is_some());
//! assert_eq!(session.state().player_x(), 205);
//! ```

pub mod pacer;
pub mod session;

pub use speedway_core as core;
pub use speedway_types as types;

pub use pacer::TickPacer;
pub use session::{Session, SessionStats, SessionStatus};
