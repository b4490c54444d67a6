//! Terminal "game renderer" module.
//!
//! The playfield is rasterized by the `raster` crate, then packed two pixel
//! rows per character cell with half-block glyphs, so a terminal shows the
//! same picture as the PNG frames. No widget toolkit is involved.
//!
//! - [`fb`]: the styled cell buffer and raster blitting
//! - [`game_view`]: layout (framed playfield, side panel, overlays)
//! - [`renderer`]: raw-mode terminal output with diffed redraws

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use speedway_core as core;
pub use speedway_engine as engine;
pub use speedway_raster as raster;
pub use speedway_types as types;

pub use fb::{TermBuffer, TermCell, HALF_BLOCK};
pub use game_view::{GameView, Viewport, TERMINAL_CELL_SIZE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
