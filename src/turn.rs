//! Turn classification for the wall-following rule.
//!
//! At each junction the robot ranks candidate moves by the turn they
//! would require relative to its incoming heading: Left beats
//! Straight beats Right beats Back. The classification uses 2D
//! cross/dot products of grid heading vectors and assumes single-cell
//! grid steps; it is not a general-angle classifier.

use crate::coord::GridCoord;

/// Relative turn class, ordered by preference (lower = preferred).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Turn {
    Left = 0,
    Straight = 1,
    Right = 2,
    Back = 3,
}

impl Turn {
    /// Classify the turn from `prev -> current` onto `current -> candidate`.
    ///
    /// With no established heading (`prev` is `None`, the very first
    /// move) every candidate counts as [`Turn::Straight`].
    ///
    /// Headings are taken in a math convention where "up" is the
    /// decreasing-row direction, so a positive cross product means a
    /// left turn on screen.
    pub fn classify(prev: Option<GridCoord>, current: GridCoord, candidate: GridCoord) -> Turn {
        let prev = match prev {
            Some(p) => p,
            None => return Turn::Straight,
        };

        // Incoming heading v and outgoing heading n, row axis flipped.
        let vx = current.col - prev.col;
        let vy = prev.row - current.row;
        let nx = candidate.col - current.col;
        let ny = current.row - candidate.row;

        let cross = vx * ny - vy * nx;
        let dot = vx * nx + vy * ny;

        if cross > 0 {
            Turn::Left
        } else if cross < 0 {
            Turn::Right
        } else if dot > 0 {
            Turn::Straight
        } else {
            Turn::Back
        }
    }

    /// Numeric rank, 0 (Left) through 3 (Back).
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }
}
