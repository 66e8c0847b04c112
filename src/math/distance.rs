//! Euclidean distance between cells and distance-ordered sorting

use crate::spatial::cell::Cell;

/// Euclidean distance between the centres of two cells
pub fn distance(a: Cell, b: Cell) -> f64 {
    let d_col = f64::from(a.col) - f64::from(b.col);
    let d_row = f64::from(a.row) - f64::from(b.row);
    d_col.hypot(d_row)
}

/// Sort cells by ascending distance to `reference`
///
/// Stable insertion sort: the first cell seeds the output and each later cell
/// is inserted before the first sorted cell that is strictly farther away, or
/// appended if there is none. Equally distant cells keep their input order.
/// The input is consumed.
pub fn sort_by_distance(reference: Cell, cells: Vec<Cell>) -> Vec<Cell> {
    let mut remaining = cells.into_iter();
    let Some(seed) = remaining.next() else {
        return Vec::new();
    };

    let mut sorted = Vec::with_capacity(remaining.len() + 1);
    sorted.push(seed);

    for cell in remaining {
        let cell_distance = distance(reference, cell);
        let position = sorted
            .iter()
            .position(|&placed| cell_distance < distance(reference, placed))
            .unwrap_or(sorted.len());
        sorted.insert(position, cell);
    }

    sorted
}

/// Whether `cell` appears in `cells`
pub fn contains_cell(cell: Cell, cells: &[Cell]) -> bool {
    cells.contains(&cell)
}
