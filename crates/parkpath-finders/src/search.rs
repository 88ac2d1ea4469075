use parkpath_core::{Grid, GridError, Point};

use crate::error::FindResult;

/// Per-cell bookkeeping for a single finder run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchState {
    /// Discovered and put on the frontier.
    pub opened: bool,
    /// Fully expanded.
    pub closed: bool,
    /// Visited by an IDA* run with recursion tracking enabled.
    pub tested: bool,
    /// Cost from the start.
    pub g: f64,
    /// Heuristic estimate to the goal, computed once per run.
    pub h: f64,
    /// Frontier priority.
    pub f: f64,
    /// Flat index of the cell this one was reached from.
    pub parent: Option<usize>,
}

// ---------------------------------------------------------------------------
// Internal frontier entry for the priority-queue searches
// ---------------------------------------------------------------------------

/// Reference into the state arena, ordered by `f` for use in `BinaryHeap`.
///
/// Equal `f` values pop in insertion order.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchContext
// ---------------------------------------------------------------------------

/// Caller-owned arena of [`SearchState`]s, one per grid cell.
///
/// The walkability [`Grid`] never holds search data; every run writes into a
/// context instead. Finders reset the context before they start, so one
/// context can be reused for sequential queries, and concurrent queries over
/// a shared grid just need one context each.
#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    width: usize,
    height: usize,
    states: Vec<SearchState>,
}

impl SearchContext {
    /// Allocate a context sized for `grid`.
    pub fn new(grid: &Grid) -> Self {
        let width = grid.width() as usize;
        let height = grid.height() as usize;
        Self {
            width,
            height,
            states: vec![SearchState::default(); width * height],
        }
    }

    /// Resize for `grid` if needed and reset every state.
    ///
    /// Keeps the allocation when the cell count fits.
    pub fn fit(&mut self, grid: &Grid) {
        let width = grid.width() as usize;
        let height = grid.height() as usize;
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.states.resize(width * height, SearchState::default());
        }
        self.reset();
    }

    /// Clear every state back to unopened, zero cost, no parent.
    pub fn reset(&mut self) {
        self.states.fill(SearchState::default());
    }

    /// State of the cell at `p`, or `None` outside the context.
    pub fn state(&self, p: Point) -> Option<&SearchState> {
        self.idx(p).map(|i| &self.states[i])
    }

    /// Iterator over the cells a run has touched (opened, closed or tested).
    pub fn visited(&self) -> impl Iterator<Item = Point> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.opened || s.closed || s.tested)
            .map(|(i, _)| self.point(i))
    }

    /// Number of cells closed by the last run.
    pub fn closed_count(&self) -> usize {
        self.states.iter().filter(|s| s.closed).count()
    }

    /// Follow parent links from `goal` back to the start, then reverse.
    pub fn backtrace(&self, goal: Point) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = self.idx(goal);
        while let Some(ci) = cur {
            path.push(self.point(ci));
            cur = self.states[ci].parent;
        }
        path.reverse();
        path
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &SearchState {
        &self.states[idx]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut SearchState {
        &mut self.states[idx]
    }
}

/// Prepare `ctx` for a run on `grid` and resolve both endpoints.
///
/// Fails with [`GridError::OutOfBounds`] if either endpoint is off the grid.
pub(crate) fn begin(
    ctx: &mut SearchContext,
    grid: &Grid,
    start: Point,
    goal: Point,
) -> FindResult<(usize, usize)> {
    let out_of_bounds = |pos| GridError::OutOfBounds {
        pos,
        width: grid.width(),
        height: grid.height(),
    };
    let start_idx = grid.index(start).ok_or_else(|| out_of_bounds(start))?;
    let goal_idx = grid.index(goal).ok_or_else(|| out_of_bounds(goal))?;
    // Same row-major layout as the grid once fitted.
    ctx.fit(grid);
    Ok((start_idx, goal_idx))
}
