//! Tests for grid contracts and the in-memory tile grid

#[cfg(test)]
mod tests {
    use tilepath::spatial::cell::Cell;
    use tilepath::spatial::grid::{GridExtent, GridOccupancy, GridSize, TileGrid};

    const WALL: u8 = 0;
    const FLOOR: u8 = 1;
    const WATER: u8 = 2;

    fn sample_grid() -> Option<TileGrid> {
        TileGrid::from_ascii(&["#..", ".#.", "..#", "###"], WALL, FLOOR).ok()
    }

    // Tests bounds checks on both axes including negatives
    // Verified by using <= in contains
    #[test]
    fn test_contains_checks_both_axes() {
        let size = GridSize::new(4, 3);

        assert!(size.contains(Cell::new(0, 0)));
        assert!(size.contains(Cell::new(3, 2)));
        assert!(!size.contains(Cell::new(4, 0)));
        assert!(!size.contains(Cell::new(0, 3)));
        assert!(!size.contains(Cell::new(-1, 1)));
    }

    // Tests ASCII parsing sets walls and kinds
    #[test]
    fn test_from_ascii_parses_walls() {
        let Some(grid) = sample_grid() else {
            unreachable!("sample map should parse");
        };

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.is_wall(Cell::new(0, 0)), Some(true));
        assert_eq!(grid.is_wall(Cell::new(1, 0)), Some(false));
        assert_eq!(grid.kind_at(Cell::new(1, 1)), Some(WALL));
        assert_eq!(grid.kind_at(Cell::new(2, 1)), Some(FLOOR));
    }

    #[test]
    fn test_from_ascii_rejects_ragged_rows() {
        assert!(TileGrid::from_ascii(&["##", "#"], WALL, FLOOR).is_err());
    }

    // Tests off-map reads are None/non-obstacle and writes are ignored
    // Verified by wrapping negative coordinates into range
    #[test]
    fn test_off_map_access() {
        let mut grid = TileGrid::new(2, 2, FLOOR, true);

        assert_eq!(grid.kind_at(Cell::new(-1, 0)), None);
        assert_eq!(grid.is_wall(Cell::new(2, 0)), None);
        assert!(!grid.is_obstacle(Cell::new(0, 5)));
        assert!(!grid.set_wall(Cell::new(-1, -1), false));
        assert!(!grid.set_kind(Cell::new(9, 9), WATER));
        assert!(grid.is_obstacle(Cell::new(1, 1)));
    }

    // Tests the full scan order is columns outer, rows inner
    // Verified by swapping loop nesting
    #[test]
    fn test_all_cells_where_obstacle_scan_order() {
        let Some(grid) = sample_grid() else {
            unreachable!("sample map should parse");
        };

        let walls = grid.all_cells_where_obstacle(true);
        assert_eq!(
            walls,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 3),
                Cell::new(1, 1),
                Cell::new(1, 3),
                Cell::new(2, 2),
                Cell::new(2, 3),
            ]
        );

        let open = grid.all_cells_where_obstacle(false);
        assert_eq!(open.len() + walls.len(), 12);
        assert_eq!(open.first().copied(), Some(Cell::new(0, 1)));
    }

    #[test]
    fn test_set_wall_on_kind() {
        let mut grid = TileGrid::new(3, 3, FLOOR, false);
        grid.set_kind(Cell::new(1, 1), WATER);
        grid.set_kind(Cell::new(2, 0), WATER);

        assert_eq!(grid.set_wall_on_kind(WATER, true), 2);
        assert_eq!(grid.all_cells_where_obstacle(true).len(), 2);
        assert!(grid.is_obstacle(Cell::new(2, 0)));
    }

    // Tests swapping replaces only the source kind
    #[test]
    fn test_swap_kind() {
        let Some(mut grid) = sample_grid() else {
            unreachable!("sample map should parse");
        };

        assert_eq!(grid.swap_kind(WALL, WATER), 6);
        assert!(grid.cells_of_kind(WALL).is_empty());
        assert_eq!(grid.cells_of_kind(WATER).len(), 6);
        assert_eq!(grid.cells_of_kind(FLOOR).len(), 6);
    }

    // Tests straight lines in either order, clipped to the map
    // Verified by iterating only start..=end
    #[test]
    fn test_draw_line_horizontal_and_vertical() {
        let mut grid = TileGrid::new(5, 5, FLOOR, false);

        let drawn = grid.draw_line(WATER, Cell::new(3, 1), Cell::new(1, 1));
        assert_eq!(
            drawn,
            vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(3, 1)]
        );

        let clipped = grid.draw_line(WATER, Cell::new(4, 3), Cell::new(4, 8));
        assert_eq!(clipped, vec![Cell::new(4, 3), Cell::new(4, 4)]);
        assert_eq!(grid.cells_of_kind(WATER).len(), 5);
    }

    #[test]
    fn test_draw_line_rejects_diagonal() {
        let mut grid = TileGrid::new(5, 5, FLOOR, false);

        assert!(
            grid.draw_line(WATER, Cell::new(0, 0), Cell::new(3, 3))
                .is_empty()
        );
        assert!(grid.cells_of_kind(WATER).is_empty());
    }

    // Tests applying a corridor clears walls, sets kinds and skips off-map cells
    // Verified by counting off-map cells as writes
    #[test]
    fn test_apply_corridor() {
        let mut grid = TileGrid::new(4, 4, WALL, true);
        let corridor = vec![
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(1, 1),
            Cell::new(-1, 1),
            Cell::new(2, 1),
        ];

        assert_eq!(grid.apply_corridor(&corridor, FLOOR), 4);
        assert_eq!(grid.all_cells_where_obstacle(false).len(), 3);
        assert_eq!(grid.kind_at(Cell::new(2, 1)), Some(FLOOR));
        assert!(grid.is_obstacle(Cell::new(3, 1)));
    }
}
