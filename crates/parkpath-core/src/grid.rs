//! The [`Grid`] type: a rectangular walkability map.
//!
//! A `Grid` only stores which cells can be walked on. Search bookkeeping
//! lives elsewhere, so one grid can back any number of independent queries.
//! Cloning a `Grid` makes a deep copy.

use crate::error::{GridError, GridResult};
use crate::geom::{Point, Range, RangeIter};

const WALL: char = '#';
const FLOOR: char = '.';

/// A width×height matrix of walkable flags, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    width: i32,
    height: i32,
    walkable: Vec<bool>,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    width: i32,
    height: i32,
    walkable: Vec<bool>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> GridResult<Self> {
        let RawGrid {
            width,
            height,
            walkable,
        } = raw;
        let expected = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h));
        if expected != Some(walkable.len()) {
            return Err(GridError::InvalidDimensions {
                width,
                height,
                cells: walkable.len(),
            });
        }
        Ok(Self {
            width,
            height,
            walkable,
        })
    }
}

impl Grid {
    /// Create a fully walkable grid. Negative dimensions yield an empty grid.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            walkable: vec![true; (w as usize) * (h as usize)],
        }
    }

    /// Build a grid from a row-major matrix. Any non-zero entry marks an
    /// unwalkable cell.
    pub fn from_matrix<R: AsRef<[u8]>>(rows: &[R]) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut walkable = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::InconsistentSize { line: y });
            }
            walkable.extend(row.iter().map(|&v| v == 0));
        }
        Ok(Self {
            width: width as i32,
            height: height as i32,
            walkable,
        })
    }

    /// Parse an ASCII map: `#` is blocked, `.` is walkable, one line per row.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, but
    /// not of individual lines.
    pub fn parse(s: &str) -> GridResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new(0, 0));
        }
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (y, line) in s.lines().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, ch) in line.chars().enumerate() {
                match ch {
                    FLOOR => row.push(0),
                    WALL => row.push(1),
                    _ => {
                        return Err(GridError::InvalidRune {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                }
            }
            rows.push(row);
        }
        Self::from_matrix(&rows)
    }

    /// Grid width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.walkable.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walkable.is_empty()
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn is_inside(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat row-major index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.is_inside(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// Inverse of [`index`](Grid::index).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    fn checked_index(&self, p: Point) -> GridResult<usize> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            width: self.width,
            height: self.height,
        })
    }

    /// Whether the cell at `p` can be walked on.
    ///
    /// Fails with [`GridError::OutOfBounds`] outside the grid.
    pub fn is_walkable(&self, p: Point) -> GridResult<bool> {
        let i = self.checked_index(p)?;
        Ok(self.walkable[i])
    }

    /// Like [`is_walkable`](Grid::is_walkable), but reports `false` for
    /// cells outside the grid instead of failing.
    #[inline]
    pub fn walkable_at(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.walkable[i])
    }

    /// Mark the cell at `p` walkable or blocked.
    ///
    /// Fails with [`GridError::OutOfBounds`] outside the grid.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> GridResult<()> {
        let i = self.checked_index(p)?;
        self.walkable[i] = walkable;
        Ok(())
    }

    /// Mark every point in `obstacles` as blocked. Stops at the first
    /// out-of-range point; cells before it stay marked.
    pub fn set_obstacles<I>(&mut self, obstacles: I) -> GridResult<()>
    where
        I: IntoIterator<Item = Point>,
    {
        for p in obstacles {
            self.set_walkable(p, false)?;
        }
        Ok(())
    }

    /// Number of walkable cells.
    pub fn count_walkable(&self) -> usize {
        self.walkable.iter().filter(|&&w| w).count()
    }

    /// Row-major iterator over `(Point, walkable)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }
}

impl std::fmt::Display for Grid {
    /// Renders the grid in the format accepted by [`Grid::parse`].
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = if self.walkable_at(Point::new(x, y)) {
                    FLOOR
                } else {
                    WALL
                };
                write!(f, "{ch}")?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, bool)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, bool);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, self.grid.walkable_at(p)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Point, bool);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
