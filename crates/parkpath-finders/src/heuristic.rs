//! Heuristic selection for the informed finders.
//!
//! A [`Heuristic`] is a pure function of the absolute axis deltas between a
//! cell and the goal. Four presets are provided; anything else can be
//! injected with [`Heuristic::custom`].

use std::fmt;
use std::sync::Arc;

use parkpath_core::Point;

use crate::distance;

/// Signature of a custom heuristic: `(dx, dy) -> estimate`, both deltas ≥ 0.
pub type HeuristicFn = dyn Fn(f64, f64) -> f64 + Send + Sync;

/// A distance estimate used to order the search frontier.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `dx + dy`.
    Manhattan,
    /// `sqrt(dx² + dy²)`.
    Euclidean,
    /// `(√2 - 1)·min + max`.
    Octile,
    /// `max(dx, dy)`.
    Chebyshev,
    /// A caller-supplied function. Not serializable.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(Arc<HeuristicFn>),
}

impl Heuristic {
    /// Wrap a custom function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// The zero heuristic, which turns A* into Dijkstra's algorithm.
    pub fn zero() -> Self {
        Self::custom(|_, _| 0.0)
    }

    /// Estimate for absolute deltas `(dx, dy)`.
    #[inline]
    pub fn estimate(&self, dx: f64, dy: f64) -> f64 {
        match self {
            Self::Manhattan => distance::manhattan(dx, dy),
            Self::Euclidean => distance::euclidean(dx, dy),
            Self::Octile => distance::octile(dx, dy),
            Self::Chebyshev => distance::chebyshev(dx, dy),
            Self::Custom(f) => f(dx, dy),
        }
    }

    /// Estimate between two cells.
    #[inline]
    pub fn between(&self, from: Point, to: Point) -> f64 {
        let (dx, dy) = from.abs_delta(to);
        self.estimate(f64::from(dx), f64::from(dy))
    }

    /// A heuristic returning this one's estimate multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self::custom(move |dx, dy| self.estimate(dx, dy) * factor)
    }
}

impl fmt::Debug for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => f.write_str("Manhattan"),
            Self::Euclidean => f.write_str("Euclidean"),
            Self::Octile => f.write_str("Octile"),
            Self::Chebyshev => f.write_str("Chebyshev"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn between_uses_absolute_deltas() {
        let a = Point::new(4, 1);
        let b = Point::new(1, 5);
        assert_eq!(Heuristic::Manhattan.between(a, b), 7.0);
        assert_eq!(Heuristic::Manhattan.between(b, a), 7.0);
        assert_eq!(Heuristic::Chebyshev.between(a, b), 4.0);
        assert_eq!(Heuristic::Euclidean.between(a, b), 5.0);
    }

    #[test]
    fn scaled_multiplies_inner() {
        let h = Heuristic::Manhattan.scaled(1_000_000.0);
        assert_eq!(h.estimate(2.0, 1.0), 3_000_000.0);
    }

    #[test]
    fn custom_and_zero() {
        let h = Heuristic::custom(|dx, dy| 2.0 * dx + dy);
        assert_eq!(h.estimate(1.0, 3.0), 5.0);
        assert_eq!(Heuristic::zero().estimate(10.0, 10.0), 0.0);
        assert_eq!(format!("{h:?}"), "Custom(..)");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn presets_round_trip_and_custom_is_rejected() {
        let json = serde_json::to_string(&Heuristic::Octile).unwrap();
        let back: Heuristic = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, Heuristic::Octile));
        assert!(serde_json::to_string(&Heuristic::zero()).is_err());
    }
}
