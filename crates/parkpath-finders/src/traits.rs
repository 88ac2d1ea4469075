use parkpath_core::{Grid, Point};

use crate::error::FindResult;
use crate::search::SearchContext;

/// A grid pathfinding strategy.
///
/// Both methods return the path from `start` to `goal` inclusive, `[start]`
/// when the two coincide, and an empty path when the goal is unreachable.
/// They fail only when an endpoint lies outside the grid.
pub trait Finder {
    /// Run the search using caller-owned scratch state.
    ///
    /// `ctx` is refitted and reset before the search starts; after it
    /// returns, `ctx` describes what this run explored.
    fn find_path_in(
        &self,
        start: Point,
        goal: Point,
        grid: &Grid,
        ctx: &mut SearchContext,
    ) -> FindResult<Vec<Point>>;

    /// Run the search with a freshly allocated [`SearchContext`].
    fn find_path(&self, start: Point, goal: Point, grid: &Grid) -> FindResult<Vec<Point>> {
        let mut ctx = SearchContext::new(grid);
        self.find_path_in(start, goal, grid, &mut ctx)
    }
}
