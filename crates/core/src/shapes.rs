//! Shapes module - read-only occupancy tables for every piece kind and rotation
//!
//! A shape table maps `(kind, rotation)` to a `MATRIX_SIZE x MATRIX_SIZE` local matrix
//! indexed `[local_row][local_col]`. The pivot cell of each matrix lands on the
//! piece's anchor in grid space. Rotation is a table lookup, never a runtime transform.
//!
//! The engine borrows a table instead of reaching for global data, so tests can
//! inject synthetic shapes.

use crate::types::{PieceKind, MATRIX_SIZE, ROTATION_COUNT};

/// Occupancy of one rotation of one piece, `[local_row][local_col]`
pub type ShapeMatrix = [[bool; MATRIX_SIZE]; MATRIX_SIZE];

/// A matrix with no occupied cell
pub const EMPTY_MATRIX: ShapeMatrix = [[false; MATRIX_SIZE]; MATRIX_SIZE];

/// Every rotation of every piece kind, plus the shared pivot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeTable {
    shapes: [[ShapeMatrix; ROTATION_COUNT as usize]; PieceKind::COUNT],
    /// Local (x, y) of the cell mapped onto the piece anchor
    pivot: (usize, usize),
}

impl ShapeTable {
    /// The seven tetrominoes, spawn rotation pointing down, pivot at the matrix centre.
    pub const STANDARD: ShapeTable = ShapeTable::from_spawn_shapes(
        [
            parse(["     ", "     ", " ####", "     ", "     "]),
            parse(["     ", "     ", "  ## ", "  ## ", "     "]),
            parse(["     ", "     ", " ### ", "  #  ", "     "]),
            parse(["     ", "     ", "  ## ", " ##  ", "     "]),
            parse(["     ", "     ", " ##  ", "  ## ", "     "]),
            parse(["     ", "     ", " ### ", "   # ", "     "]),
            parse(["     ", "     ", " ### ", " #   ", "     "]),
        ],
        (MATRIX_SIZE / 2, MATRIX_SIZE / 2),
    );

    /// Build a table from explicit matrices.
    ///
    /// # Panics
    ///
    /// Panics if the pivot lies outside the local matrix, or if any matrix leaves
    /// the pivot cell empty. A piece with no footprint would fit everywhere and
    /// could fall forever.
    pub const fn new(
        shapes: [[ShapeMatrix; ROTATION_COUNT as usize]; PieceKind::COUNT],
        pivot: (usize, usize),
    ) -> Self {
        assert!(pivot.0 < MATRIX_SIZE && pivot.1 < MATRIX_SIZE);
        let mut kind = 0;
        while kind < PieceKind::COUNT {
            let mut rotation = 0;
            while rotation < ROTATION_COUNT as usize {
                assert!(
                    shapes[kind][rotation][pivot.1][pivot.0],
                    "shape matrix leaves the pivot cell empty"
                );
                rotation += 1;
            }
            kind += 1;
        }
        Self { shapes, pivot }
    }

    /// Build a table from one spawn matrix per kind.
    ///
    /// Rotation `r + 1` is the clockwise quarter turn of rotation `r` about the matrix
    /// centre. `O` keeps its spawn matrix for every rotation so it does not wobble.
    pub const fn from_spawn_shapes(
        spawn: [ShapeMatrix; PieceKind::COUNT],
        pivot: (usize, usize),
    ) -> Self {
        let mut shapes = [[EMPTY_MATRIX; ROTATION_COUNT as usize]; PieceKind::COUNT];
        let mut kind = 0;
        while kind < PieceKind::COUNT {
            let mut matrix = spawn[kind];
            let mut rotation = 0;
            while rotation < ROTATION_COUNT as usize {
                shapes[kind][rotation] = matrix;
                if kind != PieceKind::O.index() {
                    matrix = rotate_cw(&matrix);
                }
                rotation += 1;
            }
            kind += 1;
        }
        Self::new(shapes, pivot)
    }

    /// The same matrix for every kind and rotation, handy for synthetic boards.
    pub const fn uniform(matrix: ShapeMatrix, pivot: (usize, usize)) -> Self {
        Self::new(
            [[matrix; ROTATION_COUNT as usize]; PieceKind::COUNT],
            pivot,
        )
    }

    /// Occupancy matrix for a kind at a rotation index.
    ///
    /// # Panics
    ///
    /// Panics if `rotation >= ROTATION_COUNT`.
    #[inline]
    pub fn matrix(&self, kind: PieceKind, rotation: u8) -> &ShapeMatrix {
        &self.shapes[kind.index()][rotation as usize]
    }

    /// Whether the local cell `(x, y)` is occupied
    #[inline]
    pub fn is_occupied(&self, kind: PieceKind, rotation: u8, x: usize, y: usize) -> bool {
        self.matrix(kind, rotation)[y][x]
    }

    pub fn pivot(&self) -> (usize, usize) {
        self.pivot
    }

    /// Number of occupied cells in a matrix
    pub fn cell_count(&self, kind: PieceKind, rotation: u8) -> usize {
        self.matrix(kind, rotation)
            .iter()
            .flatten()
            .filter(|&&occupied| occupied)
            .count()
    }
}

impl Default for ShapeTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Parse rows of `#` (occupied) and anything else (empty) into a matrix.
pub const fn parse(rows: [&str; MATRIX_SIZE]) -> ShapeMatrix {
    let mut matrix = EMPTY_MATRIX;
    let mut y = 0;
    while y < MATRIX_SIZE {
        let bytes = rows[y].as_bytes();
        let mut x = 0;
        while x < MATRIX_SIZE && x < bytes.len() {
            matrix[y][x] = bytes[x] == b'#';
            x += 1;
        }
        y += 1;
    }
    matrix
}

/// Quarter turn clockwise about the matrix centre (y grows downward).
pub const fn rotate_cw(matrix: &ShapeMatrix) -> ShapeMatrix {
    let mut out = EMPTY_MATRIX;
    let last = MATRIX_SIZE - 1;
    let mut y = 0;
    while y < MATRIX_SIZE {
        let mut x = 0;
        while x < MATRIX_SIZE {
            out[x][last - y] = matrix[y][x];
            x += 1;
        }
        y += 1;
    }
    out
}
