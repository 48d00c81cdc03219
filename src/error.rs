//! Error types for icon generation

use std::path::PathBuf;
use thiserror::Error;

/// Error type for rendering and exporting the icon
#[derive(Debug, Error)]
pub enum IconError {
    /// The linked imaging library was built without a codec we need
    #[error("image codec not available: {codec}")]
    MissingDependency { codec: &'static str },

    /// The preferred typeface could not be loaded
    #[error("font '{family}' unavailable: {reason}")]
    FontUnavailable { family: String, reason: String },

    /// Writing an output file failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding an image failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for icon operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Error type for systems the linear solver cannot work on
#[derive(Debug, Error, PartialEq)]
pub enum SolverError {
    /// No equations were given
    #[error("system has no equations")]
    Empty,

    /// Number of coefficient rows and constants differ
    #[error("{rows} coefficient rows but {constants} constants")]
    LengthMismatch { rows: usize, constants: usize },

    /// A coefficient row does not have one entry per unknown
    #[error("row {row} has {len} coefficients, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    /// Back substitution produced values that do not satisfy the system
    #[error("solution failed verification: equation {equation} off by {residual:e}")]
    Verification { equation: usize, residual: f64 },
}
