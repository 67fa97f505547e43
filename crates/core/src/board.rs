//! Board module - placement operations for the active piece
//!
//! The board owns the grid and borrows a shape table. Every operation follows the
//! same cycle: erase the piece's current footprint so it cannot collide with itself,
//! validate a candidate anchor or rotation, commit it when valid, and repaint the
//! piece at whatever placement it ends up with. The grid therefore never holds a
//! piece that is still under trial.
//!
//! Outcomes are plain booleans; a rejected move or rotation leaves both the grid and
//! the piece exactly as they were.

use crate::flood::{flood, FloodAction};
use crate::grid::{Grid, GridError};
use crate::piece::{next_rotation, previous_rotation, Piece};
use crate::shapes::ShapeTable;
use crate::types::{Cell, EMPTY, ROTATION_COUNT};

/// Playfield plus the shape table used to map pieces onto it
#[derive(Debug, Clone)]
pub struct Board<'s> {
    pub(crate) grid: Grid,
    shapes: &'s ShapeTable,
}

impl<'s> Board<'s> {
    /// Create an empty board
    pub fn new(columns: usize, lines: usize, shapes: &'s ShapeTable) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(columns, lines)?,
            shapes,
        })
    }

    /// Read-only view of the cells for renderers
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shapes(&self) -> &'s ShapeTable {
        self.shapes
    }

    /// Anchor given to every spawned piece: horizontally centred, top row
    pub fn spawn_position(&self) -> (i32, i32) {
        ((self.grid.columns() / 2) as i32, 0)
    }

    /// Empty every cell for a new round
    pub fn reset(&mut self) {
        self.grid.clear();
        log::debug!("board reset");
    }

    /// Place a new piece at the spawn position and paint it.
    ///
    /// Spawning does not validate; call [`Board::is_game_over`] to check the top row.
    pub fn spawn(&mut self, piece: &mut Piece) {
        let (x, y) = self.spawn_position();
        piece.set_position(x, y);
        self.draw(piece);
        log::debug!("spawned {:?} at ({}, {})", piece.kind(), x, y);
    }

    /// Translate the piece by (dx, dy) if the target is free.
    /// Returns whether the move was committed.
    pub fn try_move(&mut self, piece: &mut Piece, dx: i32, dy: i32) -> bool {
        // An anchor past the i32 range is off the grid by definition.
        let target = piece.x().checked_add(dx).zip(piece.y().checked_add(dy));

        self.erase(piece);
        let movable = match target {
            Some(anchor) => self.fits(piece, anchor, piece.rotation()),
            None => false,
        };
        if let (true, Some((x, y))) = (movable, target) {
            piece.set_position(x, y);
        }
        self.draw(piece);

        log::trace!(
            "move {:?} by ({}, {}) -> {}",
            piece.kind(),
            dx,
            dy,
            if movable { "ok" } else { "blocked" }
        );
        movable
    }

    /// Whether the piece has landed, i.e. it cannot move one row down.
    /// Never moves the piece.
    pub fn is_fallen(&mut self, piece: &Piece) -> bool {
        self.erase(piece);
        let fallen = !self.fits(piece, (piece.x(), piece.y() + 1), piece.rotation());
        self.draw(piece);
        fallen
    }

    /// Move the piece down until it rests. Returns the number of rows descended.
    pub fn hard_drop(&mut self, piece: &mut Piece) -> u32 {
        let mut rows = 0;
        while self.try_move(piece, 0, 1) {
            rows += 1;
        }
        log::trace!("dropped {:?} {} rows", piece.kind(), rows);
        rows
    }

    /// Rotate one step counter-clockwise if the rotated shape fits at the anchor.
    pub fn rotate_left(&mut self, piece: &mut Piece) -> bool {
        self.rotate(piece, previous_rotation(piece.rotation()))
    }

    /// Rotate one step clockwise if the rotated shape fits at the anchor.
    pub fn rotate_right(&mut self, piece: &mut Piece) -> bool {
        self.rotate(piece, next_rotation(piece.rotation()))
    }

    /// Whether the top row holds any block once the piece itself is lifted off.
    pub fn is_game_over(&mut self, piece: &Piece) -> bool {
        self.erase(piece);
        let blocked = !self.grid.is_row_empty(0);
        self.draw(piece);

        if blocked {
            log::debug!("game over: top row occupied");
        }
        blocked
    }

    fn rotate(&mut self, piece: &mut Piece, rotation: u8) -> bool {
        debug_assert!(
            rotation < ROTATION_COUNT,
            "rotation index {} out of range",
            rotation
        );
        if rotation >= ROTATION_COUNT {
            return false;
        }

        self.erase(piece);
        let rotatable = self.fits(piece, piece.position(), rotation);
        if rotatable {
            piece.set_rotation(rotation);
        }
        self.draw(piece);

        log::trace!(
            "rotate {:?} to {} -> {}",
            piece.kind(),
            rotation,
            if rotatable { "ok" } else { "blocked" }
        );
        rotatable
    }

    /// Validate `piece`'s shape at a candidate anchor and rotation.
    /// The piece must already be erased.
    fn fits(&mut self, piece: &Piece, anchor: (i32, i32), rotation: u8) -> bool {
        let mut invalid = false;
        flood(
            &mut self.grid,
            self.shapes.matrix(piece.kind(), rotation),
            self.shapes.pivot(),
            anchor,
            FloodAction::Validate(&mut invalid),
        );
        !invalid
    }

    fn paint(&mut self, piece: &Piece, value: Cell) {
        flood(
            &mut self.grid,
            self.shapes.matrix(piece.kind(), piece.rotation()),
            self.shapes.pivot(),
            piece.position(),
            FloodAction::Paint(value),
        );
    }

    pub(crate) fn draw(&mut self, piece: &Piece) {
        self.paint(piece, Some(piece.kind()));
    }

    pub(crate) fn erase(&mut self, piece: &Piece) {
        self.paint(piece, EMPTY);
    }
}
