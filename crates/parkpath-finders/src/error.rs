//! Error type for finder construction and invocation.
//!
//! "No path" is not an error: finders report it as an empty path.

use parkpath_core::GridError;

/// Errors raised when a finder is configured or invoked incorrectly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum FindError {
    /// Start or goal lies outside the grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Heuristic weight is not a finite number greater than zero.
    #[error("invalid heuristic weight: {0} (must be finite and > 0)")]
    InvalidWeight(f64),

    /// Time limit is NaN.
    #[error("invalid time limit: {0} seconds")]
    InvalidTimeLimit(f64),

    /// Algorithm name not recognised.
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),
}

/// Result type for finder operations.
pub type FindResult<T> = std::result::Result<T, FindError>;

#[cfg(test)]
mod tests {
    use super::*;
    use parkpath_core::Point;

    #[test]
    fn grid_errors_pass_through() {
        let err: FindError = GridError::OutOfBounds {
            pos: Point::new(9, 9),
            width: 3,
            height: 3,
        }
        .into();
        assert_eq!(err.to_string(), "point (9, 9) is outside the 3x3 grid");
    }

    #[test]
    fn error_display() {
        assert!(FindError::InvalidWeight(-1.0).to_string().contains("-1"));
        assert_eq!(
            FindError::UnknownAlgorithm("dfs".into()).to_string(),
            "unknown algorithm: \"dfs\""
        );
    }
}
