//! Flood Tetris (workspace facade crate).
//!
//! Re-exports the engine as `flood_tetris::{core,types}` while the implementation
//! lives in dedicated crates under `crates/`.

pub use flood_tetris_core as core;
pub use flood_tetris_types as types;
