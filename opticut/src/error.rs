use thiserror::Error;

/// Result type alias for all fallible operations of the library.
pub type Result<T> = std::result::Result<T, NestError>;

/// Errors that abort an operation. Items which do not fit on the board are *not* errors,
/// they are reported as unplaced in the [`PlacementReport`](crate::entities::PlacementReport).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NestError {
    /// A shape's defining parameters are non-positive, non-finite or its kind is unknown.
    #[error("invalid shape parameter: {0}")]
    InvalidParameter(String),

    /// The board's width or height is non-positive or non-finite.
    #[error("invalid board: width {width}, height {height}")]
    InvalidBoard { width: f64, height: f64 },
}
