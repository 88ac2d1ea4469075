use std::collections::VecDeque;

use parkpath_core::{Grid, Point};

use crate::diagonal::DiagonalMovement;
use crate::error::FindResult;
use crate::neighbors::Neighbors;
use crate::options::FinderOptions;
use crate::search::{self, SearchContext};
use crate::traits::Finder;

/// Breadth-first search over a FIFO queue.
///
/// Every step counts as one hop, so with [`DiagonalMovement::Never`] the
/// path has the fewest possible steps. When diagonal moves are enabled the
/// √2 cost of a diagonal is not honoured: the path has the fewest hops, not
/// necessarily the lowest cost.
#[derive(Debug, Clone, Copy)]
pub struct BreadthFirstFinder {
    movement: DiagonalMovement,
}

impl BreadthFirstFinder {
    /// Build from options. Only the diagonal policy is used.
    pub fn new(options: &FinderOptions) -> Self {
        Self {
            movement: options.movement(),
        }
    }

    /// The resolved diagonal policy.
    pub fn movement(&self) -> DiagonalMovement {
        self.movement
    }
}

impl Finder for BreadthFirstFinder {
    fn find_path_in(
        &self,
        start: Point,
        goal: Point,
        grid: &Grid,
        ctx: &mut SearchContext,
    ) -> FindResult<Vec<Point>> {
        let (start_idx, goal_idx) = search::begin(ctx, grid, start, goal)?;

        let mut queue: VecDeque<usize> = VecDeque::new();
        ctx.node_mut(start_idx).opened = true;
        queue.push_back(start_idx);

        let mut nb = Neighbors::new();

        while let Some(ci) = queue.pop_front() {
            ctx.node_mut(ci).closed = true;
            if ci == goal_idx {
                let path = ctx.backtrace(goal);
                log::debug!("bfs: {start} -> {goal}: {} hops", path.len() - 1);
                return Ok(path);
            }

            let cp = ctx.point(ci);
            let hops = ctx.node(ci).g + 1.0;
            for &np in nb.expand(grid, cp, self.movement) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let n = ctx.node_mut(ni);
                if n.opened || n.closed {
                    continue;
                }
                n.opened = true;
                n.g = hops;
                n.parent = Some(ci);
                queue.push_back(ni);
            }
        }

        log::debug!("bfs: no path {start} -> {goal}");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::is_legal_path;

    fn bfs(movement: DiagonalMovement) -> BreadthFirstFinder {
        BreadthFirstFinder::new(&FinderOptions::default().with_diagonal_movement(movement))
    }

    #[test]
    fn minimal_hops_in_maze() {
        let grid = Grid::parse(
            "\
..#....
.##.##.
.......
##.#.#.
.......",
        )
        .unwrap();
        let path = bfs(DiagonalMovement::Never)
            .find_path(Point::new(0, 0), Point::new(6, 0), &grid)
            .unwrap();
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(6, 0)));
        assert_eq!(path.len() - 1, 10);
        assert!(is_legal_path(&grid, &path, DiagonalMovement::Never));
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::new(2, 2);
        let p = Point::new(1, 0);
        assert_eq!(bfs(DiagonalMovement::Always).find_path(p, p, &grid), Ok(vec![p]));
    }

    #[test]
    fn diagonal_counts_as_one_hop() {
        let grid = Grid::new(4, 4);
        let path = bfs(DiagonalMovement::Always)
            .find_path(Point::new(0, 0), Point::new(3, 3), &grid)
            .unwrap();
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn unreachable_goal() {
        let grid = Grid::parse(
            "\
...
###
...",
        )
        .unwrap();
        let mut ctx = SearchContext::new(&grid);
        let path = bfs(DiagonalMovement::Always)
            .find_path_in(Point::new(0, 0), Point::new(2, 2), &grid, &mut ctx)
            .unwrap();
        assert!(path.is_empty());
        assert_eq!(ctx.closed_count(), 3);
    }

    #[test]
    fn hop_count_is_recorded() {
        let grid = Grid::new(4, 1);
        let mut ctx = SearchContext::new(&grid);
        bfs(DiagonalMovement::Never)
            .find_path_in(Point::new(0, 0), Point::new(3, 0), &grid, &mut ctx)
            .unwrap();
        assert_eq!(ctx.state(Point::new(3, 0)).map(|s| s.g), Some(3.0));
    }
}
