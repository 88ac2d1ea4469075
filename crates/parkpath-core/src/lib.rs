//! **parkpath-core** — grid types for the parkpath pathfinding engine.
//!
//! This crate provides the foundational types shared by the finders:
//! geometry primitives and a walkability [`Grid`]. A grid holds no search
//! state, so the same obstacle layout can serve many queries.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{GridError, GridResult};
pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, GridIter};
