//! Grid cell addresses and continuous world positions

use std::collections::HashSet;
use std::fmt;

/// Integer (column, row) address of a grid cell
///
/// Cells are plain values and may lie outside any particular grid; bounds are
/// checked by whichever grid the cell is used against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index (x axis)
    pub col: i32,
    /// Row index (y axis)
    pub row: i32,
}

impl Cell {
    /// Create a cell from column and row
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Cell shifted by the given column and row deltas
    ///
    /// Coordinates saturate at the `i32` limits.
    #[must_use]
    pub const fn offset(self, d_col: i32, d_row: i32) -> Self {
        Self {
            col: self.col.saturating_add(d_col),
            row: self.row.saturating_add(d_row),
        }
    }

    /// Cell containing a world-space point for square cells of `cell_size`
    pub fn containing(point: Point, cell_size: f64) -> Self {
        Self {
            col: (point.x / cell_size).floor() as i32,
            row: (point.y / cell_size).floor() as i32,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((col, row): (i32, i32)) -> Self {
        Self { col, row }
    }
}

/// Ordered cells in generation or traversal order, duplicates allowed
pub type CellPath = Vec<Cell>;

/// Continuous position in world units
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point a fraction `t` of the way from `self` towards `other`
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: (other.x - self.x).mul_add(t, self.x),
            y: (other.y - self.y).mul_add(t, self.y),
        }
    }
}

/// Cells of `path` in order of first appearance, later repeats dropped
pub fn unique_cells(path: &[Cell]) -> CellPath {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().copied().filter(|cell| seen.insert(*cell)).collect()
}
