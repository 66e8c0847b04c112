//! Command-line interface for generating corridor maps as PNG files

use crate::algorithm::corridor::{CorridorSpec, Direction, generate_path_across_map};
use crate::io::configuration::{
    DEFAULT_COLUMNS, DEFAULT_CORRIDOR_WIDTH, DEFAULT_MAP_COUNT, DEFAULT_MAX_ITERATIONS,
    DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_START, DEFAULT_TURN_CHANCE, FLOOR_COLOR, FLOOR_KIND,
    MAX_GRID_DIMENSION, PIXELS_PER_CELL, WALL_COLOR, WALL_KIND,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_grid_as_png;
use crate::io::progress::ProgressManager;
use crate::math::probability::SeededRandom;
use crate::spatial::grid::TileGrid;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "tilepath")]
#[command(
    author,
    version,
    about = "Generate meandering corridor maps on a tile grid"
)]
/// Command-line arguments for the corridor map generator
pub struct Cli {
    /// Output PNG path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Map width in cells
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Map height in cells
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Direction the corridor is walked in
    #[arg(short, long, value_enum, default_value_t = Direction::Right)]
    pub direction: Direction,

    /// Percentage chance of turning at each step (clamped to 0-99)
    #[arg(short, long, default_value_t = DEFAULT_TURN_CHANCE, allow_negative_numbers = true)]
    pub turn_chance: i32,

    /// Corridor width in cells (made odd, clamped to 1-101)
    #[arg(short = 'w', long, default_value_t = DEFAULT_CORRIDOR_WIDTH, allow_negative_numbers = true)]
    pub corridor_width: i32,

    /// Start coordinate along the travel axis (defaults to the near edge)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i32>,

    /// End coordinate along the travel axis (defaults to the far edge)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i32>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of maps to generate, each with the next seed
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAP_COUNT)]
    pub count: usize,

    /// Maximum walk iterations per corridor
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Travel-axis length for the chosen direction
    pub const fn travel_length(&self) -> usize {
        if self.direction.is_vertical() {
            self.rows
        } else {
            self.columns
        }
    }

    /// Start coordinate, defaulting to the edge the direction walks away from
    pub fn start_coordinate(&self) -> i32 {
        self.start.unwrap_or_else(|| {
            if self.direction.step() > 0 {
                DEFAULT_START
            } else {
                self.far_edge()
            }
        })
    }

    /// End coordinate, defaulting to the edge the direction walks towards
    pub fn end_coordinate(&self) -> i32 {
        self.end.unwrap_or_else(|| {
            if self.direction.step() > 0 {
                self.far_edge()
            } else {
                DEFAULT_START
            }
        })
    }

    fn far_edge(&self) -> i32 {
        i32::try_from(self.travel_length().saturating_sub(1)).unwrap_or(i32::MAX)
    }

    /// Corridor parameters described by the arguments
    pub fn corridor_spec(&self) -> CorridorSpec {
        CorridorSpec::new(
            self.direction,
            self.start_coordinate(),
            self.end_coordinate(),
        )
        .with_turn_chance(self.turn_chance)
        .with_width(self.corridor_width)
        .with_max_iterations(self.max_iterations)
    }
}

/// Generates and writes the maps requested on the command line
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new map processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and export every requested map
    ///
    /// # Errors
    ///
    /// Returns an error if the map dimensions are invalid, a corridor
    /// cannot be generated, or an image cannot be written
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;

        if self.cli.count == 0 {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            self.process_map(index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (parameter, value) in [("columns", self.cli.columns), ("rows", self.cli.rows)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }

    fn process_map(&mut self, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(&self.cli.output, index, self.cli.count);

        if let Some(ref pm) = self.progress_manager {
            pm.start_map(index, &output_path);
        }

        let seed = self.cli.seed.wrapping_add(index as u64);
        let (grid, cells) = self.generate_map(seed)?;

        export_grid_as_png(
            &grid,
            &[WALL_COLOR, FLOOR_COLOR],
            PIXELS_PER_CELL,
            &output_path,
        )?;

        info!(path = %output_path.display(), seed, cells, "wrote corridor map");

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_map(index, cells, start_time.elapsed());
        }

        Ok(())
    }

    /// Build a solid map and carve one corridor into it
    ///
    /// Returns the map and the number of corridor cells generated.
    ///
    /// # Errors
    ///
    /// Returns an error if the corridor configuration cannot be generated
    pub fn generate_map(&self, seed: u64) -> Result<(TileGrid, usize)> {
        let mut grid = TileGrid::new(self.cli.columns, self.cli.rows, WALL_KIND, true);
        let spec = self.cli.corridor_spec();
        let corridor = generate_path_across_map(&grid, SeededRandom::new(seed), &spec)?;
        grid.apply_corridor(&corridor, FLOOR_KIND);
        Ok((grid, corridor.len()))
    }

    /// Output path for map `index` of `count`
    ///
    /// A single map is written to `output` as given; batches get an index
    /// suffix on the file stem.
    pub fn get_output_path(output: &Path, index: usize, count: usize) -> PathBuf {
        if count <= 1 {
            return output.to_path_buf();
        }

        let stem = output.file_stem().unwrap_or_default();
        let extension = output.extension().unwrap_or_default();
        let name = format!(
            "{}_{index}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        );

        if let Some(parent) = output.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }
}
