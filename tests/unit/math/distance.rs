//! Tests for cell distance and distance-ordered sorting

#[cfg(test)]
mod tests {
    use tilepath::math::distance::{contains_cell, distance, sort_by_distance};
    use tilepath::math::probability::{RandomSource, SeededRandom};
    use tilepath::spatial::cell::Cell;

    #[test]
    fn test_distance_is_euclidean() {
        assert!((distance(Cell::new(0, 0), Cell::new(3, 4)) - 5.0).abs() < f64::EPSILON);
        assert!((distance(Cell::new(-2, 1), Cell::new(-2, 1))).abs() < f64::EPSILON);
        assert!(
            (distance(Cell::new(1, 1), Cell::new(2, 2)) - std::f64::consts::SQRT_2).abs() < 1e-12
        );
    }

    // Tests coordinates at the i32 limits do not overflow
    // Verified by subtracting before converting to f64
    #[test]
    fn test_distance_at_extremes() {
        let d = distance(Cell::new(i32::MIN, 0), Cell::new(1, 0));
        assert!((d - 2_147_483_649.0).abs() < f64::EPSILON);

        let d = distance(Cell::new(0, i32::MAX), Cell::new(0, i32::MIN));
        assert!((d - f64::from(u32::MAX)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let reference = Cell::new(5, 5);

        assert!(sort_by_distance(reference, Vec::new()).is_empty());
        assert_eq!(
            sort_by_distance(reference, vec![Cell::new(9, 9)]),
            vec![Cell::new(9, 9)]
        );
    }

    // Tests ascending order for a mixed input
    // Verified by inserting on <= instead of <
    #[test]
    fn test_sort_orders_by_distance() {
        let reference = Cell::new(0, 0);
        let cells = vec![
            Cell::new(5, 0),
            Cell::new(1, 0),
            Cell::new(3, 3),
            Cell::new(0, 2),
        ];

        assert_eq!(
            sort_by_distance(reference, cells),
            vec![
                Cell::new(1, 0),
                Cell::new(0, 2),
                Cell::new(3, 3),
                Cell::new(5, 0)
            ]
        );
    }

    // Tests equally distant cells keep their input order
    // Verified by inserting ties before existing entries
    #[test]
    fn test_sort_is_stable_for_ties() {
        let reference = Cell::new(0, 0);
        let cells = vec![
            Cell::new(0, 2),
            Cell::new(2, 0),
            Cell::new(0, 1),
            Cell::new(-2, 0),
            Cell::new(0, -2),
        ];

        assert_eq!(
            sort_by_distance(reference, cells),
            vec![
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(2, 0),
                Cell::new(-2, 0),
                Cell::new(0, -2)
            ]
        );
    }

    // Tests the output is a sorted permutation for random inputs
    #[test]
    fn test_sort_is_sorted_permutation() {
        let mut random = SeededRandom::new(7);

        for _ in 0..20 {
            let reference = Cell::new(random.uniform_int(-5, 5), random.uniform_int(-5, 5));
            let length = random.uniform_int(0, 30) as usize;
            let cells: Vec<Cell> = (0..length)
                .map(|_| Cell::new(random.uniform_int(-10, 10), random.uniform_int(-10, 10)))
                .collect();

            let sorted = sort_by_distance(reference, cells.clone());
            assert_eq!(sorted.len(), cells.len());

            for pair in sorted.windows(2) {
                if let [a, b] = pair {
                    assert!(distance(reference, *a) <= distance(reference, *b));
                }
            }

            let mut expected = cells;
            let mut actual = sorted;
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_contains_cell() {
        let cells = [Cell::new(1, 2), Cell::new(3, 4)];

        assert!(contains_cell(Cell::new(3, 4), &cells));
        assert!(!contains_cell(Cell::new(4, 3), &cells));
        assert!(!contains_cell(Cell::new(0, 0), &[]));
    }
}
