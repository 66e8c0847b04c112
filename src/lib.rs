//! Grid geometry and path generation for 2D tile worlds
//!
//! Generates meandering corridors across a grid, orders cells by distance,
//! samples line of sight between world points, and drives followers that
//! re-plan towards a moving target. Map storage, path search and movement
//! are supplied by the host through small traits.

#![forbid(unsafe_code)]

/// Corridor generation, line of sight and path following
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Distances, ordering and random sources
pub mod math;
/// Cells, neighborhoods and grid contracts
pub mod spatial;

pub use algorithm::corridor::{CorridorGenerator, CorridorSpec, Direction, generate_path_across_map};
pub use algorithm::follow::{FollowController, FollowState, Locate, PathFinder, PathWalker};
pub use algorithm::sight::has_line_of_sight;
pub use io::error::{Result, TileError};
pub use math::distance::{distance, sort_by_distance};
pub use math::probability::{RandomSource, SeededRandom};
pub use spatial::{Cell, CellPath, GridExtent, GridOccupancy, GridSize, Point, Shape, TileGrid};
