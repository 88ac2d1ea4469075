use parkpath_core::{Grid, Point};

use crate::astar::AStarFinder;
use crate::error::FindResult;
use crate::options::FinderOptions;
use crate::search::SearchContext;
use crate::traits::Finder;

/// Factor applied to the heuristic so that it dominates `g`.
pub const GREEDY_SCALE: f64 = 1_000_000.0;

/// Greedy best-first search.
///
/// The A* engine with its heuristic scaled by [`GREEDY_SCALE`], so the
/// frontier is ordered almost purely by estimated distance to the goal.
/// Usually expands far fewer cells than A*, but the path is not guaranteed
/// to be the cheapest.
#[derive(Debug, Clone)]
pub struct BestFirstFinder {
    inner: AStarFinder,
}

impl BestFirstFinder {
    /// Build from options. Fails if the weight is not finite and positive.
    pub fn new(options: &FinderOptions) -> FindResult<Self> {
        let inner = AStarFinder::new(options)?.map_heuristic(|h| h.scaled(GREEDY_SCALE));
        Ok(Self { inner })
    }
}

impl Finder for BestFirstFinder {
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
