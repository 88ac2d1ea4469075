use std::f64::consts::SQRT_2;

use parkpath_core::{Grid, Point};

use crate::diagonal::DiagonalMovement;

/// Cached neighbor computation helper.
///
/// Enumerates the walkable neighbors of a cell: the four orthogonal ones
/// first (up, right, down, left), then the diagonals the
/// [`DiagonalMovement`] policy admits (up-left, up-right, down-right,
/// down-left).
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the legal neighbors of `p` on `grid` under `movement`.
    pub fn expand(&mut self, grid: &Grid, p: Point, movement: DiagonalMovement) -> &[Point] {
        self.buf.clear();
        let up = p.shift(0, -1);
        let right = p.shift(1, 0);
        let down = p.shift(0, 1);
        let left = p.shift(-1, 0);

        let mut open = [false; 4];
        for (i, n) in [up, right, down, left].into_iter().enumerate() {
            if grid.walkable_at(n) {
                open[i] = true;
                self.buf.push(n);
            }
        }
        if !movement.allows_diagonals() {
            return &self.buf;
        }

        let [s_up, s_right, s_down, s_left] = open;
        let diagonals = [
            (p.shift(-1, -1), s_left, s_up),
            (p.shift(1, -1), s_up, s_right),
            (p.shift(1, 1), s_right, s_down),
            (p.shift(-1, 1), s_down, s_left),
        ];
        for (n, a, b) in diagonals {
            if movement.admits(a, b) && grid.walkable_at(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

/// Cost of a single step between adjacent cells: 1 orthogonal, √2 diagonal.
#[inline]
pub fn step_cost(from: Point, to: Point) -> f64 {
    if from.is_diagonal_to(to) { SQRT_2 } else { 1.0 }
}

/// Whether moving from `from` to `to` is a single legal step on `grid`.
pub fn is_legal_step(grid: &Grid, from: Point, to: Point, movement: DiagonalMovement) -> bool {
    if !from.is_adjacent(to) || !grid.walkable_at(to) {
        return false;
    }
    if !from.is_diagonal_to(to) {
        return true;
    }
    let corner_a = grid.walkable_at(Point::new(to.x, from.y));
    let corner_b = grid.walkable_at(Point::new(from.x, to.y));
    movement.admits(corner_a, corner_b)
}
