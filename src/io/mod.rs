//! Input/output operations and error handling

/// Command-line parsing and batch map generation
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of tile maps
pub mod image;
/// Progress display for batch generation
pub mod progress;
