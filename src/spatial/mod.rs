//! Spatial data structures and grid addressing
//!
//! This module contains spatial-related functionality including:
//! - Cell and world point value types
//! - Plus and square neighborhoods
//! - Grid dimension/occupancy contracts and an in-memory tile grid
//! - Off-map detection

/// Off-map detection for tracked entities
pub mod boundary;
/// Cell addresses, paths and world points
pub mod cell;
/// Grid contracts and the in-memory tile grid
pub mod grid;
/// Plus and square neighborhoods around a cell
pub mod neighborhood;

pub use cell::{Cell, CellPath, Point};
pub use grid::{GridExtent, GridOccupancy, GridSize, TileGrid};
pub use neighborhood::Shape;
