//! Generation constants and runtime configuration defaults

// Corridor parameter bounds
/// Narrowest corridor that can be generated
pub const MIN_CORRIDOR_WIDTH: i32 = 1;
/// Widest corridor that can be generated
pub const MAX_CORRIDOR_WIDTH: i32 = 101;
/// Highest turn chance; 100 would never advance along the travel axis
pub const MAX_TURN_CHANCE: i32 = 99;

// Line of sight sampling
/// Samples taken along a sight line, independent of its length
pub const SIGHT_SAMPLES: usize = 25;
/// World units per cell edge
pub const DEFAULT_CELL_SIZE: f64 = 16.0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default map width in cells
pub const DEFAULT_COLUMNS: usize = 16;
/// Default map height in cells
pub const DEFAULT_ROWS: usize = 16;
/// Default percentage chance of turning at each step
pub const DEFAULT_TURN_CHANCE: i32 = 50;
/// Default corridor width in cells
pub const DEFAULT_CORRIDOR_WIDTH: i32 = 1;
/// Default start coordinate along the travel axis
pub const DEFAULT_START: i32 = 0;
/// Default iteration cap applied by the command line tool
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000_000;
/// Default number of maps generated per run
pub const DEFAULT_MAP_COUNT: usize = 1;
/// Default follower speed in world units per second
pub const DEFAULT_FOLLOW_SPEED: f64 = 100.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Side length in pixels of one cell in exported images
pub const PIXELS_PER_CELL: u32 = 8;
/// RGBA colour of wall cells in exported images
pub const WALL_COLOR: [u8; 4] = [40, 40, 48, 255];
/// RGBA colour of open cells in exported images
pub const FLOOR_COLOR: [u8; 4] = [222, 204, 160, 255];
/// Tile kind written to generated corridors
pub const FLOOR_KIND: u8 = 1;
/// Tile kind used for the initial solid map
pub const WALL_KIND: u8 = 0;
/// Default filter directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "tilepath=info";
