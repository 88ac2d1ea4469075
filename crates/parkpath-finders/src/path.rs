//! Helpers for inspecting returned paths.

use parkpath_core::{Grid, Point};

use crate::diagonal::DiagonalMovement;
use crate::neighbors::{is_legal_step, step_cost};

/// Total movement cost of `path`: 1 per orthogonal step, √2 per diagonal.
pub fn path_cost(path: &[Point]) -> f64 {
    path.windows(2).map(|w| step_cost(w[0], w[1])).sum()
}

/// Whether every consecutive pair in `path` is a legal step on `grid`
/// under `movement`. Empty and single-cell paths are trivially legal.
pub fn is_legal_path(grid: &Grid, path: &[Point], movement: DiagonalMovement) -> bool {
    path.windows(2)
        .all(|w| is_legal_step(grid, w[0], w[1], movement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    #[test]
    fn cost_of_mixed_path() {
        let path = [Point::new(0, 0), Point::new(1, 1), Point::new(1, 2)];
        assert!((path_cost(&path) - (1.0 + SQRT_2)).abs() < 1e-12);
        assert_eq!(path_cost(&path[..1]), 0.0);
        assert_eq!(path_cost(&[]), 0.0);
    }

    #[test]
    fn corner_cut_is_illegal_when_forbidden() {
        let grid = Grid::parse(".#\n..").unwrap();
        let cut = [Point::new(0, 0), Point::new(1, 1)];
        assert!(is_legal_path(&grid, &cut, DiagonalMovement::IfAtMostOneObstacle));
        assert!(!is_legal_path(&grid, &cut, DiagonalMovement::OnlyWhenNoObstacles));
        assert!(!is_legal_path(&grid, &cut, DiagonalMovement::Never));
    }

    #[test]
    fn jumps_and_walls_are_illegal() {
        let grid = Grid::parse("...\n.#.").unwrap();
        let jump = [Point::new(0, 0), Point::new(2, 0)];
        assert!(!is_legal_path(&grid, &jump, DiagonalMovement::Always));
        let into_wall = [Point::new(1, 0), Point::new(1, 1)];
        assert!(!is_legal_path(&grid, &into_wall, DiagonalMovement::Always));
        assert!(is_legal_path(&grid, &[Point::new(2, 1)], DiagonalMovement::Never));
    }
}
