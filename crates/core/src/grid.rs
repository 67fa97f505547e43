//! Grid module - owns the playfield cells
//!
//! The grid is a `columns x lines` rectangle where each cell is either empty or holds
//! the kind of a committed piece. Storage is one flat `Vec<Cell>` in row-major order
//! (`y * columns + x`), allocated once at construction and never resized.
//! Coordinates: (x, y) where x grows to the right and y grows downward; row 0 is the top.

use std::fmt;

use crate::types::{Cell, EMPTY};

/// Construction failure for a [`Grid`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A dimension was zero
    InvalidDimensions { columns: usize, lines: usize },
    /// The cell count does not fit the coordinate space
    TooLarge { columns: usize, lines: usize },
}

impl GridError {
    pub fn code(self) -> &'static str {
        match self {
            GridError::InvalidDimensions { .. } => "invalid_dimensions",
            GridError::TooLarge { .. } => "grid_too_large",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            GridError::InvalidDimensions { .. } => "grid dimensions must be positive",
            GridError::TooLarge { .. } => "grid dimensions exceed the coordinate space",
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GridError::InvalidDimensions { columns, lines }
            | GridError::TooLarge { columns, lines } => {
                write!(f, "{} ({}x{})", self.message(), columns, lines)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// The playfield - fixed `columns x lines` cells in flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    lines: usize,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell empty
    pub fn new(columns: usize, lines: usize) -> Result<Self, GridError> {
        if columns == 0 || lines == 0 {
            return Err(GridError::InvalidDimensions { columns, lines });
        }
        let len = columns
            .checked_mul(lines)
            .filter(|_| columns <= i32::MAX as usize && lines <= i32::MAX as usize)
            .ok_or(GridError::TooLarge { columns, lines })?;

        Ok(Self {
            columns,
            lines,
            cells: vec![EMPTY; len],
        })
    }

    /// Flat index from (x, y), or `None` when out of bounds
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(y as usize * self.columns + x as usize)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Whether (x, y) lies inside the grid
    #[inline(always)]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.columns && (y as usize) < self.lines
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell. Only the shape traversal paints, and it checks bounds first.
    #[inline(always)]
    pub(crate) fn paint_cell(&mut self, x: i32, y: i32, value: Cell) {
        debug_assert!(self.contains(x, y), "paint outside grid at ({x}, {y})");
        let idx = y as usize * self.columns + x as usize;
        self.cells[idx] = value;
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, top row is 0
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.lines {
            return None;
        }
        let start = y * self.columns;
        Some(&self.cells[start..start + self.columns])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.columns)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Check if a row holds no block at all
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_none()))
    }

    /// Overwrite row `y` with the rows above it, shifting each down by one.
    /// The top row becomes empty.
    pub(crate) fn shift_down_into(&mut self, y: usize) {
        debug_assert!(y < self.lines);
        let width = self.columns;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(EMPTY);
    }

    /// Empty every cell
    pub(crate) fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_grid_new_empty() {
        let grid = Grid::new(10, 20).unwrap();
        assert_eq!(grid.columns(), 10);
        assert_eq!(grid.lines(), 20);
        assert_eq!(grid.cells().len(), 200);
        assert!(grid.cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_grid_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 20),
            Err(GridError::InvalidDimensions {
                columns: 0,
                lines: 20
            })
        );
        assert!(matches!(
            Grid::new(10, 0),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_grid_rejects_overflow() {
        let err = Grid::new(usize::MAX, 2).unwrap_err();
        assert_eq!(err.code(), "grid_too_large");
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(10, 20).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 19), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 20), None);
    }

    #[test]
    fn test_paint_and_read() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.paint_cell(1, 2, Some(PieceKind::T));

        assert_eq!(grid.cell_at(1, 2), Some(Some(PieceKind::T)));
        assert_eq!(grid.cell_at(0, 0), Some(EMPTY));
        assert_eq!(grid.cell_at(4, 0), None);
        assert_eq!(grid.cells()[2 * 4 + 1], Some(PieceKind::T));
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn test_shift_down_into() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.paint_cell(0, 0, Some(PieceKind::I));
        grid.paint_cell(1, 1, Some(PieceKind::O));
        grid.paint_cell(0, 2, Some(PieceKind::L));
        grid.paint_cell(1, 2, Some(PieceKind::L));

        grid.shift_down_into(2);

        assert_eq!(grid.row(0), Some(&[EMPTY, EMPTY][..]));
        assert_eq!(grid.row(1), Some(&[Some(PieceKind::I), EMPTY][..]));
        assert_eq!(grid.row(2), Some(&[EMPTY, Some(PieceKind::O)][..]));
    }

    #[test]
    fn test_row_queries() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.paint_cell(0, 1, Some(PieceKind::S));
        assert!(!grid.is_row_full(1));
        assert!(!grid.is_row_empty(1));
        grid.paint_cell(1, 1, Some(PieceKind::Z));
        assert!(grid.is_row_full(1));
        assert!(grid.is_row_empty(0));
        assert!(!grid.is_row_full(5));
        assert_eq!(grid.rows().count(), 2);
    }
}
