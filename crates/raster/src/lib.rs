//! Raster rendering for the game.
//!
//! Turns a [`GameSnapshot`](speedway_core::GameSnapshot) into an RGB bitmap
//! with procedurally drawn shapes (no assets), and encodes bitmaps as PNG for
//! hosts that ship frames elsewhere.
//!
//! ```
//! use speedway_core::GameState;
//! use speedway_raster::{palette, Renderer};
//!
//! let snap = GameState::new(1).snapshot();
//! let img = Renderer::new(2).render(&snap);
//! assert_eq!((img.width(), img.height()), (200, 300));
//! assert_eq!(img.get(0, 0), Some(palette::BACKGROUND));
//! ```

pub mod bitmap;
pub mod error;
pub mod scene;

pub use speedway_core as core;
pub use speedway_types as types;

pub use bitmap::{RasterImage, Rgb};
pub use error::RasterError;
pub use scene::{palette, Renderer, REFERENCE_CELL_SIZE};
