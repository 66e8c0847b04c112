//! Plus and square shaped neighborhoods around a cell
//!
//! Neighborhoods are not bounds checked; cells off the edge of the map are
//! returned as-is and left for the caller or the occupancy grid to reject.

use std::fmt;
use std::str::FromStr;

use crate::spatial::cell::Cell;

/// Neighborhood shape used when collecting cells around a center
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Arms of `distance` cells along each of the four axis directions
    Plus,
    /// Every cell within `distance` on both axes
    Square,
}

impl Shape {
    /// All supported shapes, in tag order
    pub const ALL: [Self; 2] = [Self::Plus, Self::Square];

    /// Numeric tag for the shape (0 = plus, 1 = square)
    pub const fn tag(self) -> u8 {
        match self {
            Self::Plus => 0,
            Self::Square => 1,
        }
    }

    /// Shape for a numeric tag, `None` for unrecognized tags
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Plus),
            1 => Some(Self::Square),
            _ => None,
        }
    }

    /// Cells of this shape around `center`
    pub fn cells(self, center: Cell, distance: u32) -> Vec<Cell> {
        match self {
            Self::Plus => neighbors_plus(center, distance),
            Self::Square => neighbors_square(center, distance),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => f.write_str("plus"),
            Self::Square => f.write_str("square"),
        }
    }
}

impl FromStr for Shape {
    type Err = crate::io::error::TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plus" => Ok(Self::Plus),
            "square" => Ok(Self::Square),
            _ => Err(crate::io::error::invalid_parameter(
                "shape",
                &s,
                &"expected 'plus' or 'square'",
            )),
        }
    }
}

/// Signed reach for `distance`, capped at `i32::MAX`
pub fn arm_length(distance: u32) -> i32 {
    i32::try_from(distance).unwrap_or(i32::MAX)
}

/// Center followed by `distance` cells along each axis direction
///
/// Order is west arm, east arm, north arm, south arm, each arm listed from
/// the far end inwards for west/north and outwards for east/south. Yields
/// `4 * distance + 1` cells.
pub fn neighbors_plus(center: Cell, distance: u32) -> Vec<Cell> {
    let d = arm_length(distance);
    let mut cells = Vec::with_capacity(4 * d as usize + 1);
    cells.push(center);

    cells.extend((-d..0).map(|i| center.offset(i, 0)));
    cells.extend((1..=d).map(|i| center.offset(i, 0)));
    cells.extend((-d..0).map(|i| center.offset(0, i)));
    cells.extend((1..=d).map(|i| center.offset(0, i)));

    cells
}

/// Center followed by every cell of the square of half-size `distance`
///
/// The square is scanned column by column, so the center shows up a second
/// time at offset (0, 0). That multiplicity is kept; dedupe with
/// [`unique_cells`](crate::spatial::cell::unique_cells) if it matters.
pub fn neighbors_square(center: Cell, distance: u32) -> Vec<Cell> {
    let d = arm_length(distance);
    let side = 2 * d as usize + 1;
    let mut cells = Vec::with_capacity(side * side + 1);
    cells.push(center);

    for d_col in -d..=d {
        for d_row in -d..=d {
            cells.push(center.offset(d_col, d_row));
        }
    }

    cells
}

/// Cells of the given shape around `center`
pub fn adjacent_cells(shape: Shape, center: Cell, distance: u32) -> Vec<Cell> {
    shape.cells(center, distance)
}

/// Cells for a numeric shape tag; unrecognized tags yield no cells
pub fn adjacent_cells_for_tag(tag: u8, center: Cell, distance: u32) -> Vec<Cell> {
    Shape::from_tag(tag).map_or_else(Vec::new, |shape| shape.cells(center, distance))
}
