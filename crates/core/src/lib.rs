//! Core placement engine - pure, deterministic, and testable
//!
//! This crate owns the playfield and every rule that touches it: moving and rotating
//! the active piece, detecting landing and game over, and clearing complete rows.
//! It has no UI, timing, or I/O; the game loop drives it one call at a time.
//!
//! # Module Structure
//!
//! - [`grid`]: flat `columns x lines` cell storage with read-only accessors for renderers
//! - [`shapes`]: injected occupancy tables for every piece kind and rotation
//! - [`piece`]: the active piece (kind, rotation index, anchor)
//! - [`flood`]: the shape traversal shared by painting and collision checks
//! - [`board`]: placement operations (spawn, move, drop, rotate, landing, game over)
//! - `lines`: row-completion scan and compaction ([`Board::clear_lines`])
//! - [`config`]: board dimensions from defaults or environment variables
//! - [`bag`]: deterministic 7-bag piece source for game loops
//!
//! # Placement Cycle
//!
//! Every operation erases the piece's current footprint, validates a candidate
//! placement with the flood traversal, commits it only when valid, and repaints. A
//! rejected move or rotation is reported as `false` and changes nothing.
//!
//! # Example
//!
//! ```
//! use flood_tetris_core::{Board, Piece, ShapeTable};
//! use flood_tetris_types::PieceKind;
//!
//! let mut board = Board::new(10, 20, &ShapeTable::STANDARD).unwrap();
//! let mut piece = Piece::new(PieceKind::T);
//! board.spawn(&mut piece);
//!
//! assert!(board.try_move(&mut piece, -1, 0));
//! board.hard_drop(&mut piece);
//! assert!(board.is_fallen(&piece));
//! assert_eq!(board.clear_lines(&piece), 0);
//! assert!(!board.is_game_over(&piece));
//! ```

pub mod bag;
pub mod board;
pub mod config;
pub mod flood;
pub mod grid;
mod lines;
pub mod piece;
pub mod shapes;

pub use flood_tetris_types as types;

// Re-export commonly used types for convenience
pub use bag::PieceBag;
pub use board::Board;
pub use config::{BoardConfig, ConfigError};
pub use flood::{flood, FloodAction};
pub use grid::{Grid, GridError};
pub use piece::Piece;
pub use shapes::{ShapeMatrix, ShapeTable};
