//! Finder configuration and algorithm selection.
//!
//! ```
//! use parkpath_finders::{Algorithm, DiagonalMovement, Finder, FinderOptions};
//! use parkpath_core::{Grid, Point};
//!
//! let options = FinderOptions::default()
//!     .with_diagonal_movement(DiagonalMovement::OnlyWhenNoObstacles)
//!     .with_weight(1.5);
//! let finder = Algorithm::AStar.build(&options).unwrap();
//! let path = finder
//!     .find_path(Point::new(0, 0), Point::new(3, 3), &Grid::new(4, 4))
//!     .unwrap();
//! assert_eq!(path.len(), 4);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::astar::AStarFinder;
use crate::best_first::BestFirstFinder;
use crate::bfs::BreadthFirstFinder;
use crate::diagonal::DiagonalMovement;
use crate::dijkstra::DijkstraFinder;
use crate::error::{FindError, FindResult};
use crate::heuristic::Heuristic;
use crate::idastar::IdaStarFinder;
use crate::traits::Finder;

/// Options shared by every finder. Each finder reads the fields it uses.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FinderOptions {
    /// Explicit policy. Takes precedence over the two flags below.
    pub diagonal_movement: Option<DiagonalMovement>,
    pub allow_diagonal: bool,
    pub dont_cross_corners: bool,
    /// `None` picks the admissible default for the resolved movement.
    pub heuristic: Option<Heuristic>,
    /// Heuristic multiplier (A* family and IDA*).
    pub weight: f64,
    /// Collect IDA* diagnostics.
    pub track_recursion: bool,
    /// IDA* wall-clock budget in seconds; `<= 0` means unbounded.
    pub time_limit: f64,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            diagonal_movement: None,
            allow_diagonal: false,
            dont_cross_corners: false,
            heuristic: None,
            weight: 1.0,
            track_recursion: false,
            time_limit: 0.0,
        }
    }
}

impl FinderOptions {
    pub fn with_diagonal_movement(mut self, movement: DiagonalMovement) -> Self {
        self.diagonal_movement = Some(movement);
        self
    }

    pub fn with_allow_diagonal(mut self, allow: bool) -> Self {
        self.allow_diagonal = allow;
        self
    }

    pub fn with_dont_cross_corners(mut self, dont: bool) -> Self {
        self.dont_cross_corners = dont;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_track_recursion(mut self, track: bool) -> Self {
        self.track_recursion = track;
        self
    }

    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit = seconds;
        self
    }

    /// The effective diagonal policy.
    pub fn movement(&self) -> DiagonalMovement {
        DiagonalMovement::resolve(
            self.diagonal_movement,
            self.allow_diagonal,
            self.dont_cross_corners,
        )
    }

    /// The configured heuristic, or the movement's admissible default.
    pub fn resolved_heuristic(&self) -> Heuristic {
        self.heuristic
            .clone()
            .unwrap_or_else(|| self.movement().default_heuristic())
    }

    /// The weight, if it is finite and positive.
    pub fn checked_weight(&self) -> FindResult<f64> {
        if self.weight.is_finite() && self.weight > 0.0 {
            Ok(self.weight)
        } else {
            Err(FindError::InvalidWeight(self.weight))
        }
    }

    /// The time limit as a duration; `None` when unbounded.
    pub fn time_budget(&self) -> FindResult<Option<Duration>> {
        if self.time_limit.is_nan() {
            return Err(FindError::InvalidTimeLimit(self.time_limit));
        }
        if self.time_limit <= 0.0 {
            return Ok(None);
        }
        Ok(Some(
            Duration::try_from_secs_f64(self.time_limit).unwrap_or(Duration::MAX),
        ))
    }
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The available search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    AStar,
    BestFirst,
    BreadthFirst,
    Dijkstra,
    IdaStar,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 5] = [
        Self::AStar,
        Self::BestFirst,
        Self::BreadthFirst,
        Self::Dijkstra,
        Self::IdaStar,
    ];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::BestFirst => "best-first",
            Self::BreadthFirst => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::IdaStar => "ida-star",
        }
    }

    /// Construct the finder, validating `options`.
    pub fn build(self, options: &FinderOptions) -> FindResult<Box<dyn Finder + Send + Sync>> {
        Ok(match self {
            Self::AStar => Box::new(AStarFinder::new(options)?),
            Self::BestFirst => Box::new(BestFirstFinder::new(options)?),
            Self::BreadthFirst => Box::new(BreadthFirstFinder::new(options)),
            Self::Dijkstra => Box::new(DijkstraFinder::new(options)),
            Self::IdaStar => Box::new(IdaStarFinder::new(options)?),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = FindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        match lower.as_str() {
            "astar" | "a*" => Ok(Self::AStar),
            "best-first" | "bestfirst" => Ok(Self::BestFirst),
            "bfs" | "breadth-first" | "breadthfirst" => Ok(Self::BreadthFirst),
            "dijkstra" => Ok(Self::Dijkstra),
            "ida-star" | "idastar" | "ida*" => Ok(Self::IdaStar),
            _ => Err(FindError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = FinderOptions::default();
        assert_eq!(o.movement(), DiagonalMovement::Never);
        assert!(matches!(o.resolved_heuristic(), Heuristic::Manhattan));
        assert_eq!(o.checked_weight(), Ok(1.0));
        assert_eq!(o.time_budget(), Ok(None));
    }

    #[test]
    fn flags_pick_octile() {
        let o = FinderOptions::default()
            .with_allow_diagonal(true)
            .with_dont_cross_corners(true);
        assert_eq!(o.movement(), DiagonalMovement::OnlyWhenNoObstacles);
        assert!(matches!(o.resolved_heuristic(), Heuristic::Octile));
    }

    #[test]
    fn explicit_heuristic_is_kept() {
        let o = FinderOptions::default()
            .with_diagonal_movement(DiagonalMovement::Always)
            .with_heuristic(Heuristic::Chebyshev);
        assert!(matches!(o.resolved_heuristic(), Heuristic::Chebyshev));
    }

    #[test]
    fn invalid_weight_fails_at_build() {
        for w in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let o = FinderOptions::default().with_weight(w);
            assert!(Algorithm::AStar.build(&o).is_err());
            assert!(Algorithm::IdaStar.build(&o).is_err());
        }
    }

    #[test]
    fn time_budget_conversion() {
        let o = FinderOptions::default().with_time_limit(0.25);
        assert_eq!(o.time_budget(), Ok(Some(Duration::from_millis(250))));
        let o = FinderOptions::default().with_time_limit(-1.0);
        assert_eq!(o.time_budget(), Ok(None));
        let o = FinderOptions::default().with_time_limit(f64::NAN);
        assert!(o.time_budget().is_err());
    }

    #[test]
    fn algorithm_names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert!("dfs".parse::<Algorithm>().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn options_from_partial_json() {
        let o: FinderOptions =
            serde_json::from_str(r#"{"allow_diagonal": true, "weight": 2.0}"#).unwrap();
        assert_eq!(o.movement(), DiagonalMovement::IfAtMostOneObstacle);
        assert_eq!(o.weight, 2.0);
        assert_eq!(o.time_limit, 0.0);
    }

    #[test]
    fn algorithm_round_trip() {
        let json = serde_json::to_string(&Algorithm::IdaStar).unwrap();
        assert_eq!(json, "\"IdaStar\"");
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Algorithm::IdaStar);
    }
}
