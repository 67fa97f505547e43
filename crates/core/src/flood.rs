//! Flood module - shape-aware traversal used to paint and to validate pieces
//!
//! A piece footprint is the 4-connected set of occupied cells in its local shape
//! matrix that is reachable from the pivot. The same walk serves two purposes:
//!
//! - **Paint**: write a value (a piece kind, or `EMPTY` to erase) into every mapped
//!   grid cell. Cells that map outside the grid are skipped, and the walk still
//!   continues through them.
//! - **Validate**: raise a shared flag when a mapped cell is outside the grid or
//!   already occupied. The colliding branch stops there; every other branch keeps
//!   walking, so a validation always costs one pass over the reachable shape.
//!
//! Local and grid coordinates advance in lock-step: the pivot lands on the anchor,
//! and each step moves both by the same offset.
//!
//! The walk uses a fixed-capacity stack instead of recursion. Neighbours are pushed
//! in reverse so they pop in the order up, right, down, left.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::shapes::ShapeMatrix;
use crate::types::{Cell, MATRIX_SIZE};

/// What to do with each visited cell
#[derive(Debug)]
pub enum FloodAction<'f> {
    /// Write the value into every in-bounds mapped cell
    Paint(Cell),
    /// Set the flag to `true` on any out-of-bounds or occupied mapped cell
    Validate(&'f mut bool),
}

/// Up, right, down, left
const NEIGHBOURS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Each visited cell pushes four neighbours, plus the initial pivot frame.
const STACK_CAPACITY: usize = 4 * MATRIX_SIZE * MATRIX_SIZE + 1;

#[derive(Debug, Clone, Copy)]
struct Step {
    local_x: i32,
    local_y: i32,
    grid_x: i32,
    grid_y: i32,
}

/// Walk `shape` from `pivot`, mapped onto `grid` with the pivot at `anchor`.
///
/// Returns the number of local cells visited.
pub fn flood(
    grid: &mut Grid,
    shape: &ShapeMatrix,
    pivot: (usize, usize),
    anchor: (i32, i32),
    mut action: FloodAction<'_>,
) -> usize {
    let mut visited = [[false; MATRIX_SIZE]; MATRIX_SIZE];
    let mut stack: ArrayVec<Step, STACK_CAPACITY> = ArrayVec::new();
    let mut count = 0;

    stack.push(Step {
        local_x: pivot.0 as i32,
        local_y: pivot.1 as i32,
        grid_x: anchor.0,
        grid_y: anchor.1,
    });

    while let Some(step) = stack.pop() {
        if step.local_x < 0
            || step.local_x >= MATRIX_SIZE as i32
            || step.local_y < 0
            || step.local_y >= MATRIX_SIZE as i32
        {
            continue;
        }
        let (lx, ly) = (step.local_x as usize, step.local_y as usize);
        if visited[ly][lx] || !shape[ly][lx] {
            continue;
        }

        visited[ly][lx] = true;
        count += 1;

        match action {
            FloodAction::Paint(value) => {
                if grid.contains(step.grid_x, step.grid_y) {
                    grid.paint_cell(step.grid_x, step.grid_y, value);
                }
            }
            FloodAction::Validate(ref mut invalid) => {
                let free = matches!(grid.cell_at(step.grid_x, step.grid_y), Some(None));
                if !free {
                    **invalid = true;
                    continue;
                }
            }
        }

        // Grid sides never exceed i32::MAX, so a saturated coordinate stays off-grid.
        for &(dx, dy) in NEIGHBOURS.iter().rev() {
            stack.push(Step {
                local_x: step.local_x + dx,
                local_y: step.local_y + dy,
                grid_x: step.grid_x.saturating_add(dx),
                grid_y: step.grid_y.saturating_add(dy),
            });
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{parse, ShapeTable};
    use crate::types::{PieceKind, EMPTY};

    const PIVOT: (usize, usize) = (2, 2);

    fn t_shape() -> ShapeMatrix {
        *ShapeTable::STANDARD.matrix(PieceKind::T, 0)
    }

    /// Pivot and a far end joined only through the row above the pivot.
    fn hook_shape() -> ShapeMatrix {
        parse(["     ", "###  ", "# #  ", "     ", "     "])
    }

    #[test]
    fn test_paint_writes_footprint() {
        let mut grid = Grid::new(10, 20).unwrap();
        let visited = flood(
            &mut grid,
            &t_shape(),
            PIVOT,
            (5, 5),
            FloodAction::Paint(Some(PieceKind::T)),
        );

        assert_eq!(visited, 4);
        assert_eq!(grid.occupied(), 4);
        for (x, y) in [(4, 5), (5, 5), (6, 5), (5, 6)] {
            assert_eq!(grid.cell_at(x, y), Some(Some(PieceKind::T)));
        }
    }

    #[test]
    fn test_paint_empty_erases() {
        let mut grid = Grid::new(10, 20).unwrap();
        flood(&mut grid, &t_shape(), PIVOT, (5, 5), FloodAction::Paint(Some(PieceKind::T)));
        flood(&mut grid, &t_shape(), PIVOT, (5, 5), FloodAction::Paint(EMPTY));
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn test_paint_skips_out_of_bounds_and_keeps_walking() {
        let mut grid = Grid::new(10, 20).unwrap();
        let visited = flood(
            &mut grid,
            &hook_shape(),
            PIVOT,
            (2, 0),
            FloodAction::Paint(Some(PieceKind::J)),
        );

        // Three cells of the hook sit above row 0; both ends are still painted.
        assert_eq!(visited, 5);
        assert_eq!(grid.cell_at(2, 0), Some(Some(PieceKind::J)));
        assert_eq!(grid.cell_at(0, 0), Some(Some(PieceKind::J)));
        assert_eq!(grid.occupied(), 2);
    }

    #[test]
    fn test_validate_free_area() {
        let mut grid = Grid::new(10, 20).unwrap();
        let mut invalid = false;
        let visited = flood(
            &mut grid,
            &t_shape(),
            PIVOT,
            (5, 5),
            FloodAction::Validate(&mut invalid),
        );
        assert!(!invalid);
        assert_eq!(visited, 4);
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn test_validate_collision_does_not_stop_siblings() {
        let mut grid = Grid::new(10, 20).unwrap();
        // Right arm of the T is the first occupied neighbour walked.
        grid.paint_cell(6, 5, Some(PieceKind::O));

        let mut invalid = false;
        let visited = flood(
            &mut grid,
            &t_shape(),
            PIVOT,
            (5, 5),
            FloodAction::Validate(&mut invalid),
        );

        assert!(invalid);
        assert_eq!(visited, 4);
    }

    #[test]
    fn test_validate_stops_colliding_branch() {
        let mut grid = Grid::new(10, 20).unwrap();
        let mut invalid = false;
        let visited = flood(
            &mut grid,
            &hook_shape(),
            PIVOT,
            (2, 0),
            FloodAction::Validate(&mut invalid),
        );

        // Pivot, then the out-of-bounds cell above it; the rest is only reachable
        // through that cell.
        assert!(invalid);
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_validate_out_of_bounds_sides() {
        let mut grid = Grid::new(10, 20).unwrap();
        for anchor in [(0, 5), (9, 5), (5, 19)] {
            let mut invalid = false;
            flood(&mut grid, &t_shape(), PIVOT, anchor, FloodAction::Validate(&mut invalid));
            assert!(invalid, "anchor {:?} should collide", anchor);
        }
    }

    #[test]
    fn test_flag_never_reset() {
        let mut grid = Grid::new(10, 20).unwrap();
        let mut invalid = true;
        flood(&mut grid, &t_shape(), PIVOT, (5, 5), FloodAction::Validate(&mut invalid));
        assert!(invalid);
    }

    #[test]
    fn test_paint_at_coordinate_extremes_touches_nothing() {
        let mut grid = Grid::new(10, 20).unwrap();
        for anchor in [(i32::MAX, i32::MAX), (i32::MIN, i32::MIN), (i32::MAX, 0)] {
            let visited = flood(
                &mut grid,
                &t_shape(),
                PIVOT,
                anchor,
                FloodAction::Paint(Some(PieceKind::T)),
            );
            assert_eq!(visited, 4);
        }
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn test_unoccupied_pivot_visits_nothing() {
        let mut grid = Grid::new(10, 20).unwrap();
        let shape = parse(["#    ", "     ", "     ", "     ", "     "]);
        let visited = flood(
            &mut grid,
            &shape,
            PIVOT,
            (5, 5),
            FloodAction::Paint(Some(PieceKind::I)),
        );
        assert_eq!(visited, 0);
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn test_disconnected_cells_are_not_walked() {
        let mut grid = Grid::new(10, 20).unwrap();
        let shape = parse(["#    ", "     ", "  #  ", "     ", "     "]);
        let visited = flood(
            &mut grid,
            &shape,
            PIVOT,
            (5, 5),
            FloodAction::Paint(Some(PieceKind::I)),
        );
        assert_eq!(visited, 1);
        assert_eq!(grid.cell_at(3, 3), Some(EMPTY));
    }

    #[test]
    fn test_full_matrix_fits_stack() {
        let mut grid = Grid::new(10, 20).unwrap();
        let shape = [[true; MATRIX_SIZE]; MATRIX_SIZE];
        let visited = flood(
            &mut grid,
            &shape,
            PIVOT,
            (5, 5),
            FloodAction::Paint(Some(PieceKind::O)),
        );
        assert_eq!(visited, MATRIX_SIZE * MATRIX_SIZE);
        assert_eq!(grid.occupied(), MATRIX_SIZE * MATRIX_SIZE);
    }
}
