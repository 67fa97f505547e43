//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, by renderers that read the grid, and by tests alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (overridable through `BoardConfig`):
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Lines**: 20 (indexed 0-19, top to bottom)
//! - **Cell size**: 24 x 24 pixels, used only by renderers
//!
//! # Shape Matrices
//!
//! Every piece shape is looked up in a `MATRIX_SIZE x MATRIX_SIZE` local matrix,
//! one per rotation index in `[0, ROTATION_COUNT)`. The pivot cell of the matrix
//! is the cell that lands on the piece's anchor in grid space.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MATRIX_SIZE` | 5 | Side of a local shape matrix |
//! | `ROTATION_COUNT` | 4 | Precomputed rotations per piece kind |
//! | `DEFAULT_COLUMNS` | 10 | Default grid width |
//! | `DEFAULT_LINES` | 20 | Default grid height |
//!
//! # Examples
//!
//! ```
//! use flood_tetris_types::{Cell, PieceKind, EMPTY, DEFAULT_COLUMNS, DEFAULT_LINES};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//! assert_eq!(parsed.index(), 2);
//!
//! let cell: Cell = Some(PieceKind::T);
//! assert_ne!(cell, EMPTY);
//!
//! assert_eq!(DEFAULT_COLUMNS, 10);
//! assert_eq!(DEFAULT_LINES, 20);
//! ```

/// Default grid width in cells
pub const DEFAULT_COLUMNS: usize = 10;

/// Default grid height in cells
pub const DEFAULT_LINES: usize = 20;

/// Default rendered cell width in pixels
pub const DEFAULT_CELL_WIDTH: u32 = 24;

/// Default rendered cell height in pixels
pub const DEFAULT_CELL_HEIGHT: u32 = 24;

/// Side length of every local shape matrix
pub const MATRIX_SIZE: usize = 5;

/// Number of precomputed rotations per piece kind
pub const ROTATION_COUNT: u8 = 4;

/// The seven tetromino piece kinds
///
/// The declaration order is the piece-type identifier stored in the grid and
/// the first index into a shape table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Number of piece kinds
    pub const COUNT: usize = 7;

    /// Every piece kind, in identifier order
    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Identifier of this kind, usable as a shape table index
    ///
    /// # Examples
    ///
    /// ```
    /// use flood_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.index(), 0);
    /// assert_eq!(PieceKind::L.index(), 6);
    /// ```
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind for a given identifier, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use flood_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty cell (see [`EMPTY`])
/// - `Some(PieceKind)`: cell holding a committed block of that kind
pub type Cell = Option<PieceKind>;

/// The empty-cell sentinel
pub const EMPTY: Cell = None;
