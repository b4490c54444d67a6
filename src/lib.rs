//! Speedway (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, integration
//! tests and benchmarks can write `speedway::core::GameState` and friends.

pub mod config;

pub use speedway_core as core;
pub use speedway_engine as engine;
pub use speedway_input as input;
pub use speedway_raster as raster;
pub use speedway_term as term;
pub use speedway_types as types;
