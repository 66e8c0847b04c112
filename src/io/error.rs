//! Error types for corridor configuration and map export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all library operations
#[derive(Debug)]
pub enum TileError {
    /// Corridor parameters can never reach the end coordinate
    ///
    /// Raised instead of looping forever when the travel direction moves
    /// away from the end coordinate, or the grid has no room on the
    /// orthogonal axis.
    Configuration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value
        value: String,
        /// Why the combination cannot be generated
        reason: String,
    },

    /// Corridor generation exceeded its configured iteration cap
    IterationLimit {
        /// Configured maximum number of iterations
        limit: usize,
        /// Travel coordinate reached when the cap was hit
        travel: i32,
        /// End coordinate that was not reached
        end: i32,
    },

    /// Parameter could not be parsed or is outside its domain
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered map to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid corridor configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::IterationLimit { limit, travel, end } => {
                write!(
                    f,
                    "Corridor generation stopped after {limit} iterations at {travel} (end {end})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for library results
pub type Result<T> = std::result::Result<T, TileError>;

impl From<std::io::Error> for TileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a corridor configuration error
pub fn configuration_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::Configuration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileError {
    TileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
