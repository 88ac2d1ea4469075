use parkpath_core::{Grid, Point};

use crate::astar::AStarFinder;
use crate::error::FindResult;
use crate::heuristic::Heuristic;
use crate::options::FinderOptions;
use crate::search::SearchContext;
use crate::traits::Finder;

/// Uniform-cost search: the A* engine with a zero heuristic.
///
/// Always returns a cheapest path. The configured heuristic and weight are
/// ignored.
#[derive(Debug, Clone)]
pub struct DijkstraFinder {
    inner: AStarFinder,
}

impl DijkstraFinder {
    /// Build from options. Only the diagonal policy is used.
    pub fn new(options: &FinderOptions) -> Self {
        Self {
            inner: AStarFinder::from_parts(options.movement(), Heuristic::zero(), 1.0),
        }
    }
}

impl Finder for DijkstraFinder {
    fn find_path_in(
        &self,
        start: Point,
        goal: Point,
        grid: &Grid,
        ctx: &mut SearchContext,
    ) -> FindResult<Vec<Point>> {
        self.inner.find_path_in(start, goal, grid, ctx)
    }
}
