//! Randomized corridor generation across a grid
//!
//! A corridor is walked from a start coordinate to an end coordinate along
//! one axis (the travel axis). The position on the other axis starts at a
//! random cell and drifts by one cell whenever the walk turns. Every step
//! stamps a cross-section so the corridor keeps its requested width.
//!
//! The walk stops only when the travel coordinate equals the end coordinate
//! exactly. Directions that move away from the end are rejected up front,
//! and an optional iteration cap bounds the walk when turn chances are high.

use std::fmt;

use clap::ValueEnum;
use tracing::debug;

use crate::io::configuration::{
    DEFAULT_CORRIDOR_WIDTH, DEFAULT_TURN_CHANCE, MAX_CORRIDOR_WIDTH, MAX_TURN_CHANCE,
    MIN_CORRIDOR_WIDTH,
};
use crate::io::error::{Result, TileError, configuration_error};
use crate::math::probability::RandomSource;
use crate::spatial::cell::{Cell, CellPath};
use crate::spatial::grid::GridExtent;

/// Direction a corridor is walked in
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Direction {
    /// Towards row 0
    Up,
    /// Towards the last row
    Down,
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
}

impl Direction {
    /// Whether the corridor travels along rows (up/down)
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Change of the travel coordinate per advance
    pub const fn step(self) -> i32 {
        match self {
            Self::Down | Self::Right => 1,
            Self::Up | Self::Left => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Corridor parameters
///
/// `start` and `end` are columns for horizontal corridors and rows for
/// vertical ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorridorSpec {
    /// Travel direction
    pub direction: Direction,
    /// Percentage chance of turning instead of advancing at each step
    pub turn_chance_percentage: i32,
    /// Corridor width in cells
    pub width: i32,
    /// Travel coordinate the corridor starts at
    pub start: i32,
    /// Travel coordinate the corridor ends at
    pub end: i32,
    /// Optional cap on walk iterations
    pub max_iterations: Option<usize>,
}

impl CorridorSpec {
    /// Corridor from `start` to `end` with default width and turn chance
    pub const fn new(direction: Direction, start: i32, end: i32) -> Self {
        Self {
            direction,
            turn_chance_percentage: DEFAULT_TURN_CHANCE,
            width: DEFAULT_CORRIDOR_WIDTH,
            start,
            end,
            max_iterations: None,
        }
    }

    /// Set the turn chance percentage
    #[must_use]
    pub const fn with_turn_chance(mut self, percentage: i32) -> Self {
        self.turn_chance_percentage = percentage;
        self
    }

    /// Set the corridor width
    #[must_use]
    pub const fn with_width(mut self, width: i32) -> Self {
        self.width = width;
        self
    }

    /// Cap the number of walk iterations
    #[must_use]
    pub const fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// Copy with width and turn chance brought into range
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            width: normalize_width(self.width),
            turn_chance_percentage: normalize_turn_chance(self.turn_chance_percentage),
            ..self.clone()
        }
    }
}

/// Force a width odd by decrementing even values, then clamp to `[1, 101]`
pub fn normalize_width(width: i32) -> i32 {
    let odd = if width.rem_euclid(2) == 0 {
        width.saturating_sub(1)
    } else {
        width
    };
    odd.clamp(MIN_CORRIDOR_WIDTH, MAX_CORRIDOR_WIDTH)
}

/// Clamp a turn chance to `[0, 99]`
pub fn normalize_turn_chance(percentage: i32) -> i32 {
    percentage.clamp(0, MAX_TURN_CHANCE)
}

const fn place(vertical: bool, travel: i32, orthogonal: i32) -> Cell {
    if vertical {
        Cell::new(orthogonal, travel)
    } else {
        Cell::new(travel, orthogonal)
    }
}

/// Cells across the travel axis at `travel`, centred on `orthogonal`
fn cross_section(
    vertical: bool,
    travel: i32,
    orthogonal: i32,
    half_width: i32,
) -> impl Iterator<Item = Cell> {
    (-half_width..=half_width)
        .map(move |i| place(vertical, travel, orthogonal.saturating_add(i)))
}

/// Corridor walker bound to a grid's dimensions and a random source
pub struct CorridorGenerator<'a, G: GridExtent + ?Sized, R: RandomSource> {
    extent: &'a G,
    random: R,
}

impl<'a, G: GridExtent + ?Sized, R: RandomSource> CorridorGenerator<'a, G, R> {
    /// Create a generator for the given grid
    pub const fn new(extent: &'a G, random: R) -> Self {
        Self { extent, random }
    }

    /// Give back the random source
    pub fn into_random(self) -> R {
        self.random
    }

    /// Walk a corridor and return every stamped cell in order
    ///
    /// The result contains duplicates: cross-sections overlap, and every
    /// iteration appends its center cell after stamping. Cells off the map
    /// are possible when the corridor is wide; applying the path to tile
    /// storage is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The direction moves away from `end`, so the walk could never stop
    /// - The grid has no cells across the travel axis
    /// - The walk exceeds `max_iterations`
    pub fn generate(&mut self, spec: &CorridorSpec) -> Result<CellPath> {
        let spec = spec.normalized();
        let vertical = spec.direction.is_vertical();
        let step = spec.direction.step();
        let orthogonal_max = self.orthogonal_max(&spec)?;
        check_reachable(&spec)?;

        let half_width = spec.width / 2;
        let mut travel = spec.start;
        let mut orthogonal = self.random.uniform_int(0, orthogonal_max);
        let mut cells = Vec::new();

        cells.extend(cross_section(vertical, travel, orthogonal, half_width));

        let mut iterations = 0usize;
        while travel != spec.end {
            if let Some(limit) = spec.max_iterations
                && iterations >= limit
            {
                return Err(TileError::IterationLimit {
                    limit,
                    travel,
                    end: spec.end,
                });
            }
            iterations += 1;

            if self.random.percent_chance(spec.turn_chance_percentage) {
                let sign = self.random.uniform_int(0, 1) * 2 - 1;
                let shifted = orthogonal.saturating_add(sign);
                orthogonal = self.random.constrain(shifted, 0, orthogonal_max);
            } else {
                travel = travel.saturating_add(step);
            }
            cells.extend(cross_section(vertical, travel, orthogonal, half_width));
            cells.push(place(vertical, travel, orthogonal));
        }

        debug!(
            direction = %spec.direction,
            width = spec.width,
            turn_chance = spec.turn_chance_percentage,
            iterations,
            cells = cells.len(),
            "generated corridor"
        );

        Ok(cells)
    }

    fn orthogonal_max(&self, spec: &CorridorSpec) -> Result<i32> {
        let extent = if spec.direction.is_vertical() {
            self.extent.width()
        } else {
            self.extent.height()
        };
        if extent == 0 {
            return Err(configuration_error(
                "grid",
                &format!("{}x{}", self.extent.width(), self.extent.height()),
                &format!("no cells across a {} corridor", spec.direction),
            ));
        }
        Ok(i32::try_from(extent - 1).unwrap_or(i32::MAX))
    }
}

fn check_reachable(spec: &CorridorSpec) -> Result<()> {
    let moving_away = match spec.direction.step() {
        1 => spec.end < spec.start,
        _ => spec.end > spec.start,
    };
    if moving_away {
        return Err(configuration_error(
            "end",
            &spec.end,
            &format!(
                "walking {} from {} never reaches {}",
                spec.direction, spec.start, spec.end
            ),
        ));
    }
    Ok(())
}

/// Generate a corridor across the map described by `extent`
///
/// # Errors
///
/// Returns an error if the corridor configuration cannot terminate or
/// exceeds its iteration cap; see [`CorridorGenerator::generate`].
pub fn generate_path_across_map<G, R>(
    extent: &G,
    random: R,
    spec: &CorridorSpec,
) -> Result<CellPath>
where
    G: GridExtent + ?Sized,
    R: RandomSource,
{
    CorridorGenerator::new(extent, random).generate(spec)
}
