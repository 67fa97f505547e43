//! Piece module - the falling block handed to the board by the game loop
//!
//! A piece is a kind, a rotation index and an anchor in grid space. Fields are read
//! through getters; only the board commits a new anchor or rotation, and only after
//! the candidate placement validated.

use crate::types::{PieceKind, ROTATION_COUNT};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: u8,
    x: i32,
    y: i32,
}

impl Piece {
    /// Create a piece at rotation 0. The anchor is set by `Board::spawn`.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: 0,
            y: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Anchor column
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Anchor row
    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub(crate) fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub(crate) fn set_rotation(&mut self, rotation: u8) {
        debug_assert!(rotation < ROTATION_COUNT);
        self.rotation = rotation;
    }
}

/// Rotation index one step counter-clockwise, wrapping 0 to `ROTATION_COUNT - 1`
pub fn previous_rotation(rotation: u8) -> u8 {
    if rotation > 0 {
        rotation - 1
    } else {
        ROTATION_COUNT - 1
    }
}

/// Rotation index one step clockwise, wrapping `ROTATION_COUNT - 1` to 0
pub fn next_rotation(rotation: u8) -> u8 {
    if rotation < ROTATION_COUNT - 1 {
        rotation + 1
    } else {
        0
    }
}
