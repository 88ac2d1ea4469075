//! Distance estimates over absolute axis deltas `(dx, dy)`.

use std::f64::consts::SQRT_2;

/// Manhattan (L1) distance. Admissible for 4-way movement.
#[inline]
pub fn manhattan(dx: f64, dy: f64) -> f64 {
    dx + dy
}

/// Euclidean (L2) distance.
#[inline]
pub fn euclidean(dx: f64, dy: f64) -> f64 {
    dx.hypot(dy)
}

/// Octile distance: diagonal steps cost √2, straight steps cost 1.
#[inline]
pub fn octile(dx: f64, dy: f64) -> f64 {
    let f = SQRT_2 - 1.0;
    if dx < dy {
        f * dx + dy
    } else {
        f * dy + dx
    }
}

/// Chebyshev (L∞) distance.
#[inline]
pub fn chebyshev(dx: f64, dy: f64) -> f64 {
    dx.max(dy)
}
