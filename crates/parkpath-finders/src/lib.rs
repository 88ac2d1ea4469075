//! Grid pathfinding finders.
//!
//! This crate provides interchangeable search strategies over a
//! [`parkpath_core::Grid`]:
//!
//! - **A\*** cost-optimal search ([`AStarFinder`])
//! - **Best-first** greedy search ([`BestFirstFinder`])
//! - **Dijkstra** uniform-cost search ([`DijkstraFinder`])
//! - **Breadth-first** hop-count search ([`BreadthFirstFinder`])
//! - **IDA\*** iterative-deepening search with an optional time budget
//!   ([`IdaStarFinder`])
//!
//! Every finder implements [`Finder`]. Per-run bookkeeping lives in a
//! caller-visible [`SearchContext`], never in the grid, so one grid can back
//! any number of queries. An unreachable goal yields an empty path, not an
//! error.
//!
//! # Module layout
//!
//! | Module | Provides |
//! |---|---|
//! | `diagonal` | [`DiagonalMovement`] corner rules |
//! | `heuristic`, `distance` | [`Heuristic`] presets and custom estimates |
//! | `neighbors` | [`Neighbors`] expansion and step costs |
//! | `search` | [`SearchContext`] / [`SearchState`] arena |
//! | `options` | [`FinderOptions`] and [`Algorithm`] selection |

mod astar;
mod best_first;
mod bfs;
mod diagonal;
mod dijkstra;
mod distance;
mod error;
mod heuristic;
mod idastar;
mod neighbors;
mod options;
mod path;
#[cfg(test)]
mod properties;
mod search;
mod traits;

pub use astar::AStarFinder;
pub use best_first::{BestFirstFinder, GREEDY_SCALE};
pub use bfs::BreadthFirstFinder;
pub use diagonal::DiagonalMovement;
pub use dijkstra::DijkstraFinder;
pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use error::{FindError, FindResult};
pub use heuristic::{Heuristic, HeuristicFn};
pub use idastar::{IdaSearch, IdaStarFinder, RecursionStats};
pub use neighbors::{Neighbors, is_legal_step, step_cost};
pub use options::{Algorithm, FinderOptions};
pub use path::{is_legal_path, path_cost};
pub use search::{SearchContext, SearchState};
pub use traits::Finder;
