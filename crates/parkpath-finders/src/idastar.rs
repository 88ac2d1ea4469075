//! Iterative-deepening A* (IDA*).
//!
//! Repeats a depth-first search bounded by an `f`-cost cutoff, raising the
//! cutoff each round to the smallest `f` that overshot it. Memory use is
//! proportional to the route length instead of the explored area.
//!
//! The depth-first search runs on an explicit stack of frames rather than
//! native recursion, so deep routes cannot exhaust the thread stack. A cell
//! already on the current route is not re-entered.
//!
//! An optional wall-clock budget aborts the search. An aborted search returns
//! an empty path, exactly like a goal that cannot be reached; callers that
//! must tell the two apart can enable recursion tracking and inspect
//! [`RecursionStats::timed_out`].

use std::time::{Duration, Instant};

use parkpath_core::{Grid, Point};

use crate::diagonal::DiagonalMovement;
use crate::error::FindResult;
use crate::heuristic::Heuristic;
use crate::neighbors::{Neighbors, step_cost};
use crate::options::FinderOptions;
use crate::search::{self, SearchContext};
use crate::traits::Finder;

/// Diagnostic counters collected when recursion tracking is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecursionStats {
    /// Deepening rounds run, including the last one.
    pub iterations: usize,
    /// Cells evaluated across all rounds (with repeats).
    pub nodes_visited: usize,
    /// Deepest route explored, in steps from the start.
    pub max_depth: usize,
    /// The time budget ran out.
    pub timed_out: bool,
}

/// Outcome of [`IdaStarFinder::search_in`].
#[derive(Debug, Clone, PartialEq)]
pub struct IdaSearch {
    /// Route from start to goal, or empty.
    pub path: Vec<Point>,
    /// Present only when recursion tracking is enabled.
    pub stats: Option<RecursionStats>,
}

/// Iterative-deepening A* finder.
#[derive(Debug, Clone)]
pub struct IdaStarFinder {
    movement: DiagonalMovement,
    heuristic: Heuristic,
    weight: f64,
    track_recursion: bool,
    time_limit: Option<Duration>,
}

/// Result of one bounded depth-first round.
enum Probe {
    Found(Vec<Point>),
    /// Smallest `f` above the cutoff; infinite for a dead end or an abort.
    Bound(f64),
}

struct Frame {
    idx: usize,
    pos: Point,
    g: f64,
    neighbors: Vec<Point>,
    next: usize,
    min: f64,
}

impl IdaStarFinder {
    /// Build from options. Fails on a bad weight or a NaN time limit.
    pub fn new(options: &FinderOptions) -> FindResult<Self> {
        Ok(Self {
            movement: options.movement(),
            heuristic: options.resolved_heuristic(),
            weight: options.checked_weight()?,
            track_recursion: options.track_recursion,
            time_limit: options.time_budget()?,
        })
    }

    /// The resolved diagonal policy.
    pub fn movement(&self) -> DiagonalMovement {
        self.movement
    }

    /// Wall-clock budget, `None` when unbounded.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Run the search and return the path together with diagnostics.
    ///
    /// With tracking enabled, every evaluated cell is flagged
    /// [`tested`](crate::SearchState::tested) in `ctx` and holds the `g`/`f`
    /// of its latest evaluation.
    pub fn search_in(
        &self,
        start: Point,
        goal: Point,
        grid: &Grid,
        ctx: &mut SearchContext,
    ) -> FindResult<IdaSearch> {
        let (start_idx, goal_idx) = search::begin(ctx, grid, start, goal)?;
        let mut stats = self.track_recursion.then(RecursionStats::default);
        if start_idx == goal_idx {
            return Ok(IdaSearch {
                path: vec![start],
                stats,
            });
        }

        let deadline = self.time_limit.map(|d| Instant::now() + d);
        let mut cutoff = self.weight * self.heuristic.between(start, goal);

        let path = loop {
            if let Some(s) = stats.as_mut() {
                s.iterations += 1;
            }
            log::trace!("ida*: deepening {start} -> {goal} with cutoff {cutoff}");
            match self.deepen(grid, ctx, start_idx, goal, cutoff, deadline, &mut stats) {
                Probe::Found(route) => break route,
                Probe::Bound(next) if next.is_infinite() => break Vec::new(),
                Probe::Bound(next) => cutoff = next,
            }
        };

        if path.is_empty() {
            log::debug!("ida*: no path {start} -> {goal}");
        } else {
            log::debug!("ida*: {start} -> {goal}: {} steps", path.len() - 1);
        }
        Ok(IdaSearch { path, stats })
    }

    fn evaluate(&self, p: Point, g: f64, goal: Point) -> f64 {
        g + self.weight * self.heuristic.between(p, goal)
    }

    fn frame(&self, grid: &Grid, nb: &mut Neighbors, idx: usize, pos: Point, g: f64) -> Frame {
        Frame {
            idx,
            pos,
            g,
            neighbors: nb.expand(grid, pos, self.movement).to_vec(),
            next: 0,
            min: f64::INFINITY,
        }
    }

    /// One depth-first round from the start, pruning at `cutoff`.
    #[allow(clippy::too_many_arguments)]
    fn deepen(
        &self,
        grid: &Grid,
        ctx: &mut SearchContext,
        start_idx: usize,
        goal: Point,
        cutoff: f64,
        deadline: Option<Instant>,
        stats: &mut Option<RecursionStats>,
    ) -> Probe {
        let mut nb = Neighbors::new();
        let start = ctx.point(start_idx);
        let start_f = self.evaluate(start, 0.0, goal);
        if start_f > cutoff {
            return Probe::Bound(start_f);
        }

        let mut stack = vec![self.frame(grid, &mut nb, start_idx, start, 0.0)];
        ctx.node_mut(start_idx).opened = true;

        let probe = loop {
            let depth = stack.len();
            let Some(top) = stack.last_mut() else {
                break Probe::Bound(f64::INFINITY);
            };

            if top.next == top.neighbors.len() {
                // Every child explored: hand the best overshoot to the parent.
                let min = top.min;
                ctx.node_mut(top.idx).opened = false;
                stack.pop();
                match stack.last_mut() {
                    Some(parent) => parent.min = parent.min.min(min),
                    None => break Probe::Bound(min),
                }
                continue;
            }

            if deadline.is_some_and(|d| Instant::now() >= d) {
                log::debug!("ida*: time limit reached at depth {depth}");
                if let Some(s) = stats.as_mut() {
                    s.timed_out = true;
                }
                break Probe::Bound(f64::INFINITY);
            }

            let np = top.neighbors[top.next];
            top.next += 1;
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if ctx.node(ni).opened {
                continue;
            }

            let g = top.g + step_cost(top.pos, np);
            let f = self.evaluate(np, g, goal);
            if let Some(s) = stats.as_mut() {
                s.nodes_visited += 1;
                s.max_depth = s.max_depth.max(depth);
                let n = ctx.node_mut(ni);
                n.tested = true;
                n.g = g;
                n.f = f;
            }

            if f > cutoff {
                top.min = top.min.min(f);
                continue;
            }
            if np == goal {
                let route = stack.iter().map(|fr| fr.pos).chain([np]).collect();
                break Probe::Found(route);
            }

            let child = self.frame(grid, &mut nb, ni, np, g);
            ctx.node_mut(ni).opened = true;
            stack.push(child);
        };

        for fr in &stack {
            ctx.node_mut(fr.idx).opened = false;
        }
        probe
    }
}

impl Finder for IdaStarFinder {
    fn find_path_in(
        &self,
        start: Point,
        goal: Point,
        grid: &Grid,
        ctx: &mut SearchContext,
    ) -> FindResult<Vec<Point>> {
        Ok(self.search_in(start, goal, grid, ctx)?.path)
    }
}
