use std::collections::BinaryHeap;

use parkpath_core::{Grid, Point};

use crate::diagonal::DiagonalMovement;
use crate::error::FindResult;
use crate::heuristic::Heuristic;
use crate::neighbors::{Neighbors, step_cost};
use crate::options::FinderOptions;
use crate::search::{self, OpenEntry, SearchContext};
use crate::traits::Finder;

/// Best-first search ordered by `f = g + weight·h`.
///
/// With an admissible heuristic and `weight == 1` the returned path has
/// minimal total cost. A larger weight trades optimality for fewer
/// expansions. [`BestFirstFinder`](crate::BestFirstFinder) and
/// [`DijkstraFinder`](crate::DijkstraFinder) are this engine with a
/// different heuristic plugged in.
#[derive(Debug, Clone)]
pub struct AStarFinder {
    movement: DiagonalMovement,
    heuristic: Heuristic,
    weight: f64,
}

impl AStarFinder {
    /// Build from options. Fails if the weight is not finite and positive.
    pub fn new(options: &FinderOptions) -> FindResult<Self> {
        Ok(Self::from_parts(
            options.movement(),
            options.resolved_heuristic(),
            options.checked_weight()?,
        ))
    }

    /// The resolved diagonal policy.
    pub fn movement(&self) -> DiagonalMovement {
        self.movement
    }

    /// The heuristic used to order the frontier.
    pub fn heuristic(&self) -> &Heuristic {
        &self.heuristic
    }

    /// Multiplier applied to the heuristic.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub(crate) fn from_parts(movement: DiagonalMovement, heuristic: Heuristic, weight: f64) -> Self {
        Self {
            movement,
            heuristic,
            weight,
        }
    }

    /// Replace the heuristic, keeping movement and weight.
    pub(crate) fn map_heuristic(self, f: impl FnOnce(Heuristic) -> Heuristic) -> Self {
        Self {
            heuristic: f(self.heuristic),
            ..self
        }
    }
}

impl Finder for AStarFinder {
    fn find_path_in(
        &self,
        start: Point,
        goal: Point,
        grid: &Grid,
        ctx: &mut SearchContext,
    ) -> FindResult<Vec<Point>> {
        let (start_idx, goal_idx) = search::begin(ctx, grid, start, goal)?;
        if start_idx == goal_idx {
            return Ok(vec![start]);
        }

        let mut seq = 0u64;
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        {
            let node = ctx.node_mut(start_idx);
            node.g = 0.0;
            node.h = self.heuristic.between(start, goal);
            node.f = self.weight * node.h;
            node.opened = true;
            open.push(OpenEntry {
                idx: start_idx,
                f: node.f,
                seq,
            });
        }

        let mut nb = Neighbors::new();
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Stale entry left behind when the node's priority improved.
            if ctx.node(ci).closed {
                continue;
            }
            if ci == goal_idx {
                break 'search true;
            }

            ctx.node_mut(ci).closed = true;
            expanded += 1;
            let current_g = ctx.node(ci).g;
            let current_point = ctx.point(ci);

            for &np in nb.expand(grid, current_point, self.movement) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let n = ctx.node_mut(ni);
                if n.closed {
                    continue;
                }
                let tentative_g = current_g + step_cost(current_point, np);
                if n.opened && tentative_g >= n.g {
                    continue;
                }
                if !n.opened {
                    n.h = self.heuristic.between(np, goal);
                    n.opened = true;
                }
                n.g = tentative_g;
                n.f = tentative_g + self.weight * n.h;
                n.parent = Some(ci);

                seq += 1;
                open.push(OpenEntry { idx: ni, f: n.f, seq });
            }
        };

        if !found {
            log::debug!("astar: no path {start} -> {goal} after {expanded} expansions");
            return Ok(Vec::new());
        }

        let path = ctx.backtrace(goal);
        log::debug!(
            "astar: {start} -> {goal}: {} steps, {expanded} expansions",
            path.len() - 1
        );
        Ok(path)
    }
}
