//! Error type for grid construction and access.

use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A coordinate lies outside the grid.
    #[error("point {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// The rejected coordinate.
        pos: Point,
        /// Grid width.
        width: i32,
        /// Grid height.
        height: i32,
    },

    /// Rows of a matrix or map do not all have the same width.
    #[error("grid row {line} has a different width than the first row")]
    InconsistentSize {
        /// Zero-based index of the first offending row.
        line: usize,
    },

    /// A map contains a character other than `.` or `#`.
    #[error("invalid map character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Point },

    /// Stored dimensions disagree with the number of cells, or are negative.
    #[error("{cells} cells do not fill a {width}x{height} grid")]
    InvalidDimensions {
        width: i32,
        height: i32,
        cells: usize,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = std::result::Result<T, GridError>;
