//! Scenario loading and rendering for the `parkpath` demo binary.
//!
//! A scenario is a JSON document describing a map, two endpoints, the
//! algorithm and its options:
//!
//! ```json
//! {
//!   "map": ["....", ".##.", "...."],
//!   "start": { "x": 0, "y": 1 },
//!   "goal": { "x": 3, "y": 1 },
//!   "algorithm": "AStar",
//!   "options": { "allow_diagonal": true }
//! }
//! ```

use parkpath_core::{Grid, GridError, Point};
use parkpath_finders::{Algorithm, FindError, FinderOptions, SearchContext, path_cost};
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

const PATH: char = '*';
const START: char = 'S';
const GOAL: char = 'G';

/// Errors surfaced by the demo.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("cannot read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Find(#[from] FindError),
    #[error("{0}")]
    Usage(String),
}

/// A single query against a map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Rows of `.` (walkable) and `#` (blocked).
    pub map: Vec<String>,
    pub start: Point,
    pub goal: Point,
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub options: FinderOptions,
}

/// What a scenario run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub grid: Grid,
    pub path: Vec<Point>,
    pub cost: f64,
    /// Cells the search touched.
    pub explored: usize,
}

impl Scenario {
    pub fn from_json(s: &str) -> Result<Self, DemoError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, DemoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the walkability grid from the map rows.
    pub fn grid(&self) -> Result<Grid, DemoError> {
        Ok(Grid::parse(&self.map.join("\n"))?)
    }

    /// Run the configured finder.
    pub fn run(&self) -> Result<Outcome, DemoError> {
        let grid = self.grid()?;
        let finder = self.algorithm.build(&self.options)?;
        let mut ctx = SearchContext::new(&grid);
        let path = finder.find_path_in(self.start, self.goal, &grid, &mut ctx)?;
        log::info!(
            "{}: {} -> {}: {} cells",
            self.algorithm,
            self.start,
            self.goal,
            path.len()
        );
        Ok(Outcome {
            cost: path_cost(&path),
            explored: ctx.visited().count(),
            grid,
            path,
        })
    }
}

/// Generate a scenario with random obstacles and two distinct walkable
/// endpoints. Fails if the map has fewer than two walkable cells.
pub fn random_scenario(
    rng: &mut impl Rng,
    width: i32,
    height: i32,
    density: f64,
    algorithm: Algorithm,
    options: FinderOptions,
) -> Result<Scenario, DemoError> {
    let mut grid = Grid::new(width, height);
    for p in grid.bounds() {
        let r: f64 = rng.random();
        if r < density {
            grid.set_walkable(p, false)?;
        }
    }
    let open: Vec<Point> = grid.iter().filter(|(_, w)| *w).map(|(p, _)| p).collect();
    if open.len() < 2 {
        return Err(DemoError::Usage(format!(
            "a {width}x{height} map at density {density} has no room for two endpoints"
        )));
    }
    let start = open[rng.random_range(0..open.len())];
    let goal = loop {
        let g = open[rng.random_range(0..open.len())];
        if g != start {
            break g;
        }
    };
    Ok(Scenario {
        map: grid.to_string().lines().map(str::to_string).collect(),
        start,
        goal,
        algorithm,
        options,
    })
}

/// Draw `path` over `grid`, marking the endpoints.
pub fn render(grid: &Grid, path: &[Point]) -> String {
    let mut rows: Vec<Vec<char>> = grid
        .to_string()
        .lines()
        .map(|l| l.chars().collect())
        .collect();
    let mut mark = |p: Point, ch: char| {
        if let Some(cell) = rows
            .get_mut(p.y as usize)
            .and_then(|r| r.get_mut(p.x as usize))
        {
            *cell = ch;
        }
    };
    for &p in path {
        mark(p, PATH);
    }
    if let (Some(&first), Some(&last)) = (path.first(), path.last()) {
        mark(first, START);
        mark(last, GOAL);
    }
    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a `WxH` size argument.
pub fn parse_size(s: &str) -> Result<(i32, i32), DemoError> {
    let bad = || DemoError::Usage(format!("expected WIDTHxHEIGHT, got {s:?}"));
    let (w, h) = s.split_once(['x', 'X']).ok_or_else(bad)?;
    let w: i32 = w.trim().parse().map_err(|_| bad())?;
    let h: i32 = h.trim().parse().map_err(|_| bad())?;
    if w <= 0 || h <= 0 {
        return Err(bad());
    }
    Ok((w, h))
}
