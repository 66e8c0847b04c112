//! Tests for cell values, world points and path deduplication

#[cfg(test)]
mod tests {
    use tilepath::spatial::cell::{Cell, Point, unique_cells};

    // Tests cells compare by both components
    // Verified by comparing only columns in PartialEq
    #[test]
    fn test_cell_equality_is_componentwise() {
        assert_eq!(Cell::new(3, 4), Cell::new(3, 4));
        assert_ne!(Cell::new(3, 4), Cell::new(3, 5));
        assert_ne!(Cell::new(3, 4), Cell::new(4, 4));
        assert_eq!(Cell::from((7, -2)), Cell::new(7, -2));
    }

    // Tests offset shifts both axes independently
    #[test]
    fn test_cell_offset() {
        assert_eq!(Cell::new(2, 2).offset(-3, 1), Cell::new(-1, 3));
    }

    // Tests offsets saturate at the i32 limits instead of overflowing
    // Verified by adding with +
    #[test]
    fn test_cell_offset_saturates() {
        assert_eq!(
            Cell::new(i32::MAX, 0).offset(1, 0),
            Cell::new(i32::MAX, 0)
        );
        assert_eq!(
            Cell::new(0, i32::MIN).offset(0, -5),
            Cell::new(0, i32::MIN)
        );
    }

    // Tests world points floor into cells, including negative coordinates
    // Verified by truncating instead of flooring
    #[test]
    fn test_cell_containing_floors_coordinates() {
        assert_eq!(Cell::containing(Point::new(0.0, 0.0), 16.0), Cell::new(0, 0));
        assert_eq!(Cell::containing(Point::new(15.9, 16.0), 16.0), Cell::new(0, 1));
        assert_eq!(Cell::containing(Point::new(-0.5, 33.0), 16.0), Cell::new(-1, 2));
    }

    #[test]
    fn test_point_lerp_endpoints() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(30.0, -20.0);

        assert_eq!(a.lerp(b, 0.0), a);
        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 20.0).abs() < 1e-9);
        assert!(mid.y.abs() < 1e-9);
    }

    // Tests dedup keeps first occurrences in order
    // Verified by sorting the output
    #[test]
    fn test_unique_cells_keeps_first_occurrence_order() {
        let path = vec![
            Cell::new(2, 0),
            Cell::new(1, 0),
            Cell::new(2, 0),
            Cell::new(0, 0),
            Cell::new(1, 0),
        ];

        assert_eq!(
            unique_cells(&path),
            vec![Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)]
        );
        assert!(unique_cells(&[]).is_empty());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(-1, 12).to_string(), "(-1, 12)");
    }
}
