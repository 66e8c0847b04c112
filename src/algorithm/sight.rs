//! Line of sight by sampling cells along a straight segment
//!
//! The segment between two world points is divided into a fixed number of
//! equal steps regardless of its length. Each sample is mapped to the cell
//! containing it and tested against an obstacle predicate. Long segments can
//! therefore skip over thin walls; raise the sample count if that matters.

use crate::io::configuration::SIGHT_SAMPLES;
use crate::spatial::cell::{Cell, Point};

/// Cells visited by `samples` equal steps from `from` towards `to`
///
/// Includes the cell under `from`; the final sample falls one step short of
/// `to`.
pub fn sample_cells(from: Point, to: Point, cell_size: f64, samples: usize) -> Vec<Cell> {
    (0..samples)
        .map(|i| Cell::containing(from.lerp(to, i as f64 / samples as f64), cell_size))
        .collect()
}

/// Whether no sampled cell between `from` and `to` is an obstacle
///
/// Uses [`SIGHT_SAMPLES`] samples.
pub fn has_line_of_sight<F>(from: Point, to: Point, cell_size: f64, is_obstacle: F) -> bool
where
    F: FnMut(Cell) -> bool,
{
    has_line_of_sight_with_samples(from, to, cell_size, SIGHT_SAMPLES, is_obstacle)
}

/// [`has_line_of_sight`] with an explicit sample count
///
/// Stops at the first blocked sample.
pub fn has_line_of_sight_with_samples<F>(
    from: Point,
    to: Point,
    cell_size: f64,
    samples: usize,
    mut is_obstacle: F,
) -> bool
where
    F: FnMut(Cell) -> bool,
{
    (0..samples).all(|i| {
        let t = i as f64 / samples as f64;
        !is_obstacle(Cell::containing(from.lerp(to, t), cell_size))
    })
}
