//! Geometry primitives: [`Coord`] and [`Rect`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward, columns grow to
//! the right, so "north" is `row - 1`.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid coordinate with named row and column components.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The eight candidates at distance `step`: north, south, west, east,
    /// then north-west, north-east, south-west, south-east.
    ///
    /// No bounds filtering happens here.
    #[inline]
    pub const fn neighbors(self, step: i32) -> [Coord; 8] {
        [
            self.shift(-step, 0),
            self.shift(step, 0),
            self.shift(0, -step),
            self.shift(0, step),
            self.shift(-step, -step),
            self.shift(-step, step),
            self.shift(step, -step),
            self.shift(step, step),
        ]
    }

    /// The four orthogonal candidates at distance `step` (N, S, W, E).
    #[inline]
    pub const fn orthogonal(self, step: i32) -> [Coord; 4] {
        [
            self.shift(-step, 0),
            self.shift(step, 0),
            self.shift(0, -step),
            self.shift(0, step),
        ]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Coord,
    pub max: Coord,
}

impl Rect {
    /// Create a rectangle from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(row0: i32, col0: i32, row1: i32, col1: i32) -> Self {
        Self {
            min: Coord::new(row0.min(row1), col0.min(col1)),
            max: Coord::new(row0.max(row1), col0.max(col1)),
        }
    }

    /// The rectangle `[0, rows) × [0, cols)`.
    #[inline]
    pub fn sized(rows: i32, cols: i32) -> Self {
        Self::new(0, 0, rows, cols)
    }

    /// Number of rows covered.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns covered.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the rectangle.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows() as usize) * (self.cols() as usize)
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// The in-range predicate: both components inside the half-open bounds.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= self.min.row && c.row < self.max.row && c.col >= self.min.col && c.col < self.max.col
    }

    /// Intersection of two rectangles. Returns the zero rectangle when they
    /// do not overlap.
    #[inline]
    pub fn intersect(self, other: Rect) -> Self {
        let r = Self {
            min: Coord::new(self.min.row.max(other.min.row), self.min.col.max(other.min.col)),
            max: Coord::new(self.max.row.min(other.max.row), self.max.col.min(other.max.col)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// The cell at the middle of the rectangle (rounded toward `min`).
    #[inline]
    pub fn center(self) -> Coord {
        Coord::new(
            self.min.row + (self.rows() - 1).max(0) / 2,
            self.min.col + (self.cols() - 1).max(0) / 2,
        )
    }

    /// Row-major iterator over every coordinate in the rectangle.
    #[inline]
    pub fn iter(self) -> RectIter {
        RectIter {
            rect: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Rect {
    type Item = Coord;
    type IntoIter = RectIter;
    #[inline]
    fn into_iter(self) -> RectIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// RectIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectIter {
    rect: Rect,
    cur: Coord,
}

impl Iterator for RectIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.cur.row >= self.rect.max.row || self.rect.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.rect.max.col {
            self.cur.col = self.rect.min.col;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.rect.is_empty() || self.cur.row >= self.rect.max.row {
            return (0, Some(0));
        }
        let w = self.rect.cols() as usize;
        let remaining_in_row = (self.rect.max.col - self.cur.col) as usize;
        let remaining_rows = (self.rect.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RectIter {}
