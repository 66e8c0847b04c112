//! Grid dimension and occupancy contracts, with an in-memory tile grid
//!
//! Algorithms in this crate only see grids through [`GridExtent`] and
//! [`GridOccupancy`]. [`TileGrid`] is a small reference implementation used
//! by the command line tool to materialize generated corridors.

use bitvec::prelude::*;
use ndarray::Array2;
use tracing::warn;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::cell::Cell;

/// Map dimensions in cells
pub trait GridExtent {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Whether `cell` lies within `[0, width) × [0, height)`
    fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as usize) < self.width()
            && (cell.row as usize) < self.height()
    }
}

/// Wall lookup for grid cells
pub trait GridOccupancy: GridExtent {
    /// Whether `cell` blocks movement and sight
    fn is_obstacle(&self, cell: Cell) -> bool;

    /// Every in-bounds cell whose obstacle flag equals `is_obstacle`
    ///
    /// Scans columns in the outer loop and rows in the inner loop.
    fn all_cells_where_obstacle(&self, is_obstacle: bool) -> Vec<Cell> {
        let mut cells = Vec::new();
        for col in 0..self.width() as i32 {
            for row in 0..self.height() as i32 {
                let cell = Cell::new(col, row);
                if self.is_obstacle(cell) == is_obstacle {
                    cells.push(cell);
                }
            }
        }
        cells
    }
}

/// Bare dimensions for callers that have no tile storage
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Number of columns
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
}

impl GridSize {
    /// Create dimensions from column and row counts
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }
}

impl GridExtent for GridSize {
    fn width(&self) -> usize {
        self.columns
    }

    fn height(&self) -> usize {
        self.rows
    }
}

/// Tile design and wall flag for every cell of a fixed-size map
///
/// Kinds are stored in an `(rows, cols)` array; wall flags are packed in a
/// row-major bitvector. Reads outside the map return `None` and writes
/// outside the map are ignored.
#[derive(Clone, Debug)]
pub struct TileGrid {
    kinds: Array2<u8>,
    walls: BitVec,
    columns: usize,
    rows: usize,
}

impl TileGrid {
    /// Create a map filled with one tile kind and wall state
    pub fn new(columns: usize, rows: usize, kind: u8, wall: bool) -> Self {
        Self {
            kinds: Array2::from_elem((rows, columns), kind),
            walls: BitVec::repeat(wall, rows * columns),
            columns,
            rows,
        }
    }

    /// Parse a map from text rows, `#` for walls and anything else for floor
    ///
    /// Wall cells get `wall_kind`, floor cells get `floor_kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have different lengths
    pub fn from_ascii(lines: &[&str], wall_kind: u8, floor_kind: u8) -> Result<Self> {
        let rows = lines.len();
        let columns = lines.first().map_or(0, |line| line.chars().count());
        let mut grid = Self::new(columns, rows, floor_kind, false);

        for (row, line) in lines.iter().enumerate() {
            let length = line.chars().count();
            if length != columns {
                return Err(invalid_parameter(
                    "map",
                    &format!("row {row} has {length} cells"),
                    &format!("every row must have {columns} cells"),
                ));
            }
            for (col, symbol) in line.chars().enumerate() {
                if symbol == '#' {
                    let cell = Cell::new(col as i32, row as i32);
                    grid.set_wall(cell, true);
                    grid.set_kind(cell, wall_kind);
                }
            }
        }

        Ok(grid)
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, cell: Cell) -> Option<(usize, usize)> {
        self.contains(cell)
            .then_some((cell.row as usize, cell.col as usize))
    }

    const fn flat_index(&self, (row, col): (usize, usize)) -> usize {
        row * self.columns + col
    }

    /// Tile kind at `cell`
    pub fn kind_at(&self, cell: Cell) -> Option<u8> {
        self.index(cell)
            .and_then(|(row, col)| self.kinds.get([row, col]).copied())
    }

    /// Set the tile kind at `cell`, returning whether the cell was on the map
    pub fn set_kind(&mut self, cell: Cell, kind: u8) -> bool {
        let Some((row, col)) = self.index(cell) else {
            return false;
        };
        if let Some(slot) = self.kinds.get_mut([row, col]) {
            *slot = kind;
            true
        } else {
            false
        }
    }

    /// Wall flag at `cell`
    pub fn is_wall(&self, cell: Cell) -> Option<bool> {
        self.index(cell)
            .and_then(|index| self.walls.get(self.flat_index(index)).map(|bit| *bit))
    }

    /// Set the wall flag at `cell`, returning whether the cell was on the map
    pub fn set_wall(&mut self, cell: Cell, wall: bool) -> bool {
        let Some(index) = self.index(cell) else {
            return false;
        };
        let flat = self.flat_index(index);
        if let Some(mut bit) = self.walls.get_mut(flat) {
            *bit = wall;
            true
        } else {
            false
        }
    }

    /// Every cell holding `kind`, columns outer and rows inner
    pub fn cells_of_kind(&self, kind: u8) -> Vec<Cell> {
        let mut cells = Vec::new();
        for col in 0..self.columns as i32 {
            for row in 0..self.rows as i32 {
                let cell = Cell::new(col, row);
                if self.kind_at(cell) == Some(kind) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Set the wall flag on every cell holding `kind`
    ///
    /// Returns the number of cells touched.
    pub fn set_wall_on_kind(&mut self, kind: u8, wall: bool) -> usize {
        let cells = self.cells_of_kind(kind);
        for &cell in &cells {
            self.set_wall(cell, wall);
        }
        cells.len()
    }

    /// Replace every `from` tile with `to`, returning the number swapped
    pub fn swap_kind(&mut self, from: u8, to: u8) -> usize {
        let mut swapped = 0;
        for slot in &mut self.kinds {
            if *slot == from {
                *slot = to;
                swapped += 1;
            }
        }
        swapped
    }

    /// Paint a straight horizontal or vertical line of `kind`
    ///
    /// Both endpoints are included and may be given in either order. A
    /// diagonal request changes nothing. Returns the cells that were written.
    pub fn draw_line(&mut self, kind: u8, start: Cell, end: Cell) -> Vec<Cell> {
        let line: Vec<Cell> = if start.row == end.row {
            let (low, high) = (start.col.min(end.col), start.col.max(end.col));
            (low..=high).map(|col| Cell::new(col, start.row)).collect()
        } else if start.col == end.col {
            let (low, high) = (start.row.min(end.row), start.row.max(end.row));
            (low..=high).map(|row| Cell::new(start.col, row)).collect()
        } else {
            warn!(%start, %end, "line of tiles must be horizontal or vertical");
            return Vec::new();
        };

        line.into_iter()
            .filter(|&cell| self.set_kind(cell, kind))
            .collect()
    }

    /// Carve a generated corridor into the map
    ///
    /// Clears the wall and sets `kind` on every listed cell that lies on the
    /// map. Duplicates are harmless. Returns the number of writes made.
    pub fn apply_corridor(&mut self, cells: &[Cell], kind: u8) -> usize {
        cells
            .iter()
            .filter(|&&cell| self.set_wall(cell, false) && self.set_kind(cell, kind))
            .count()
    }
}

impl GridExtent for TileGrid {
    fn width(&self) -> usize {
        self.columns
    }

    fn height(&self) -> usize {
        self.rows
    }
}

impl GridOccupancy for TileGrid {
    fn is_obstacle(&self, cell: Cell) -> bool {
        self.is_wall(cell).unwrap_or(false)
    }
}
