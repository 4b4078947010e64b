//! Cell coordinates and canonical edges for the maze graph.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Grid cell coordinate (integer row/column indices).
///
/// Ordered by row, then column. The ordering carries no geometric
/// meaning; it exists so an undirected [`Edge`] has a single canonical
/// representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct GridCoord {
    /// Row index (increases downward)
    pub row: i32,
    /// Column index (increases rightward)
    pub col: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.row - other.row, self.col - other.col)
    }
}

impl From<[i32; 2]> for GridCoord {
    fn from([row, col]: [i32; 2]) -> Self {
        GridCoord::new(row, col)
    }
}

impl From<GridCoord> for [i32; 2] {
    fn from(c: GridCoord) -> Self {
        [c.row, c.col]
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((row, col): (i32, i32)) -> Self {
        GridCoord::new(row, col)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// An undirected connection between two cells, stored canonically
/// (smaller coordinate first) so both travel directions of one
/// physical passage map to the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    a: GridCoord,
    b: GridCoord,
}

impl Edge {
    /// Canonical edge between two cells, in either order.
    #[inline]
    pub fn between(x: GridCoord, y: GridCoord) -> Self {
        if x <= y {
            Edge { a: x, b: y }
        } else {
            Edge { a: y, b: x }
        }
    }

    /// The smaller endpoint under the coordinate ordering.
    #[inline]
    pub fn lo(&self) -> GridCoord {
        self.a
    }

    /// The larger endpoint under the coordinate ordering.
    #[inline]
    pub fn hi(&self) -> GridCoord {
        self.b
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}
