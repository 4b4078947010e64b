//! Configuration loading for VyuhaNav
//!
//! The maze is static configuration: a start cell, a goal cell, one
//! main corridor, and a list of branch corridors. Coordinates appear
//! in TOML as `[row, col]` pairs. The built-in default is a 9x12
//! course with branch dead ends and two reconnecting loops.

use crate::coord::GridCoord;
use crate::error::{Result, VyuhaError};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VyuhaConfig {
    #[serde(default)]
    pub maze: MazeLayout,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Static maze description: grid bounds, endpoints, and corridors.
#[derive(Clone, Debug, Deserialize)]
pub struct MazeLayout {
    /// Grid height in cells (default: 9)
    #[serde(default = "default_rows")]
    pub rows: i32,

    /// Grid width in cells (default: 12)
    #[serde(default = "default_cols")]
    pub cols: i32,

    /// Cell the robot starts on
    pub start: GridCoord,

    /// Cell the robot is driving toward
    pub goal: GridCoord,

    /// The main corridor, an ordered cell sequence
    pub main_path: Vec<GridCoord>,

    /// Branch corridors (dead ends and loops), registered after the
    /// main path in order
    #[serde(default)]
    pub branches: Vec<Vec<GridCoord>>,
}

/// Presentation pacing for the driving loop
#[derive(Clone, Debug, Deserialize)]
pub struct DisplayConfig {
    /// Milliseconds between automatic steps (default: 500)
    #[serde(default = "default_step_delay")]
    pub step_delay_ms: u64,

    /// Milliseconds to show the initial frame before stepping (default: 800)
    #[serde(default = "default_initial_pause")]
    pub initial_pause_ms: u64,

    /// Wait for Enter between steps instead of a timed delay
    #[serde(default)]
    pub interactive: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay(),
            initial_pause_ms: default_initial_pause(),
            interactive: false,
        }
    }
}

// Default value functions
fn default_rows() -> i32 {
    9
}
fn default_cols() -> i32 {
    12
}
fn default_step_delay() -> u64 {
    500
}
fn default_initial_pause() -> u64 {
    800
}

impl Default for MazeLayout {
    /// The built-in 9x12 course: a winding main corridor from the
    /// bottom-left to the top-right, six dead-end branches, and two
    /// loop branches that reconnect to the main corridor.
    fn default() -> Self {
        let p = |pairs: &[(i32, i32)]| -> Vec<GridCoord> {
            pairs.iter().map(|&c| GridCoord::from(c)).collect()
        };

        Self {
            rows: default_rows(),
            cols: default_cols(),
            start: GridCoord::new(8, 1),
            goal: GridCoord::new(1, 10),
            main_path: p(&[
                (8, 1),
                (7, 1),
                (6, 1),
                (5, 1),
                (4, 1),
                (3, 1),
                (2, 1),
                (1, 1),
                (1, 2),
                (1, 3),
                (1, 4),
                (1, 5),
                (2, 5),
                (3, 5),
                (4, 5),
                (5, 5),
                (6, 5),
                (6, 6),
                (6, 7),
                (5, 7),
                (4, 7),
                (3, 7),
                (2, 7),
                (1, 7),
                (1, 8),
                (1, 9),
                (1, 10),
            ]),
            branches: vec![
                p(&[(3, 5), (3, 3), (2, 3)]),
                p(&[(5, 5), (5, 3), (4, 3), (4, 4), (5, 4)]),
                p(&[(4, 7), (4, 9)]),
                p(&[(2, 7), (2, 6), (1, 6)]),
                p(&[(6, 1), (6, 3)]),
                p(&[(5, 7), (7, 7), (7, 6), (6, 6)]),
                p(&[(3, 1), (3, 2), (2, 2)]),
                p(&[(1, 3), (0, 3)]),
                p(&[(1, 5), (0, 5)]),
                p(&[(6, 7), (6, 8), (5, 8), (4, 8)]),
            ],
        }
    }
}

impl MazeLayout {
    /// True if the cell lies on the main path or any branch.
    pub fn is_track(&self, cell: GridCoord) -> bool {
        self.main_path.contains(&cell) || self.branches.iter().any(|b| b.contains(&cell))
    }

    /// Check the layout is usable: endpoints on track, all cells in
    /// bounds. Corridors shorter than 2 cells are allowed (they add
    /// no edges).
    pub fn validate(&self) -> Result<()> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(VyuhaError::Config(format!(
                "Grid bounds must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }

        for cell in self.all_cells() {
            if cell.row < 0 || cell.row >= self.rows || cell.col < 0 || cell.col >= self.cols {
                return Err(VyuhaError::Config(format!(
                    "Cell {} lies outside the {}x{} grid",
                    cell, self.rows, self.cols
                )));
            }
        }

        if !self.is_track(self.start) {
            return Err(VyuhaError::Config(format!(
                "Start {} is not on any corridor",
                self.start
            )));
        }

        if !self.is_track(self.goal) {
            return Err(VyuhaError::Config(format!(
                "Goal {} is not on any corridor",
                self.goal
            )));
        }

        Ok(())
    }

    fn all_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.main_path
            .iter()
            .chain(self.branches.iter().flatten())
            .copied()
    }
}

impl VyuhaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VyuhaError::Config(format!("Failed to read config file: {}", e)))?;
        let config: VyuhaConfig = toml::from_str(&content)?;
        config.maze.validate()?;
        Ok(config)
    }
}
