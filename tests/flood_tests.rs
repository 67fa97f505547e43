//! Flood traversal tests through the public API

use flood_tetris::core::shapes::parse;
use flood_tetris::core::{flood, FloodAction, Grid, ShapeTable};
use flood_tetris::types::{PieceKind, EMPTY, ROTATION_COUNT};

#[test]
fn test_paint_then_validate_same_spot_collides() {
    let mut grid = Grid::new(10, 20).unwrap();
    let table = ShapeTable::STANDARD;
    let shape = table.matrix(PieceKind::L, 1);

    flood(&mut grid, shape, table.pivot(), (4, 10), FloodAction::Paint(Some(PieceKind::L)));
    assert_eq!(grid.occupied(), 4);

    let mut invalid = false;
    flood(&mut grid, shape, table.pivot(), (4, 10), FloodAction::Validate(&mut invalid));
    assert!(invalid);

    flood(&mut grid, shape, table.pivot(), (4, 10), FloodAction::Paint(EMPTY));
    let mut invalid = false;
    flood(&mut grid, shape, table.pivot(), (4, 10), FloodAction::Validate(&mut invalid));
    assert!(!invalid);
}

#[test]
fn test_every_standard_shape_walks_four_cells() {
    let table = ShapeTable::STANDARD;
    for kind in PieceKind::ALL {
        for rotation in 0..ROTATION_COUNT {
            let mut grid = Grid::new(10, 20).unwrap();
            let visited = flood(
                &mut grid,
                table.matrix(kind, rotation),
                table.pivot(),
                (5, 10),
                FloodAction::Paint(Some(kind)),
            );
            assert_eq!(visited, 4, "{:?} rotation {}", kind, rotation);
            assert_eq!(grid.occupied(), 4);
        }
    }
}

#[test]
fn test_validation_cost_does_not_depend_on_collision() {
    let table = ShapeTable::STANDARD;
    let shape = table.matrix(PieceKind::I, 0);

    let mut free = Grid::new(10, 20).unwrap();
    let mut invalid = false;
    let clean = flood(&mut free, shape, table.pivot(), (5, 5), FloodAction::Validate(&mut invalid));
    assert!(!invalid);

    // Block the leftmost cell: a leaf of the walk, so every cell is still visited.
    let mut blocked = Grid::new(10, 20).unwrap();
    flood(
        &mut blocked,
        &parse(["     ", "     ", "  #  ", "     ", "     "]),
        table.pivot(),
        (4, 5),
        FloodAction::Paint(Some(PieceKind::O)),
    );
    let mut invalid = false;
    let dirty = flood(&mut blocked, shape, table.pivot(), (5, 5), FloodAction::Validate(&mut invalid));
    assert!(invalid);
    assert_eq!(clean, dirty);
}

#[test]
fn test_paint_partially_off_grid() {
    let mut grid = Grid::new(10, 20).unwrap();
    let table = ShapeTable::STANDARD;
    // Vertical I hanging above the top edge: only the lower cells land on the grid.
    let visited = flood(
        &mut grid,
        table.matrix(PieceKind::I, 1),
        table.pivot(),
        (0, 0),
        FloodAction::Paint(Some(PieceKind::I)),
    );
    assert_eq!(visited, 4);
    assert_eq!(grid.occupied(), 3);
    for y in 0..3 {
        assert_eq!(grid.cell_at(0, y), Some(Some(PieceKind::I)));
    }
}
