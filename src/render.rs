//! Terminal frame rendering.
//!
//! Pure presentation: the renderer takes the static maze layout and
//! the robot's current position and produces a text frame. It never
//! touches traversal state, and screen clearing is the driving
//! loop's business.

use std::collections::HashSet;

use crate::config::MazeLayout;
use crate::coord::GridCoord;

/// Glyphs: `B` robot, `S` start, `E` goal, `.` track, `#` off-track.
pub struct AsciiRenderer {
    rows: i32,
    cols: i32,
    start: GridCoord,
    goal: GridCoord,
    track: HashSet<GridCoord>,
}

impl AsciiRenderer {
    /// Build a renderer for a maze layout.
    pub fn new(layout: &MazeLayout) -> Self {
        let track = layout
            .main_path
            .iter()
            .chain(layout.branches.iter().flatten())
            .copied()
            .collect();

        Self {
            rows: layout.rows,
            cols: layout.cols,
            start: layout.start,
            goal: layout.goal,
            track,
        }
    }

    /// Render one frame with the robot at `robot`.
    pub fn frame(&self, robot: GridCoord) -> String {
        let mut out = String::with_capacity((self.rows * (self.cols * 2 + 1)) as usize);

        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = GridCoord::new(row, col);
                let glyph = if cell == robot {
                    'B'
                } else if cell == self.start {
                    'S'
                } else if cell == self.goal {
                    'E'
                } else if self.track.contains(&cell) {
                    '.'
                } else {
                    '#'
                };
                out.push(glyph);
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
