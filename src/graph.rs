//! Undirected maze graph built from corridor paths.
//!
//! The maze is described as one main path plus branch paths, each an
//! ordered sequence of cells. Consecutive cells within a path become
//! mutual neighbors. Neighbor lists keep insertion order: traversal
//! breaks turn-priority ties by it, so the order paths are registered
//! in is part of the maze's observable behavior.

use std::collections::HashMap;

use crate::config::MazeLayout;
use crate::coord::GridCoord;

/// Adjacency structure over maze cells.
///
/// Built once from a [`MazeLayout`], read-only during traversal.
#[derive(Clone, Debug, Default)]
pub struct MazeGraph {
    adjacency: HashMap<GridCoord, Vec<GridCoord>>,
}

impl MazeGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from a maze layout: the main path first, then
    /// each branch in order.
    pub fn from_layout(layout: &MazeLayout) -> Self {
        let mut graph = Self::new();
        graph.register_path(&layout.main_path);
        for branch in &layout.branches {
            graph.register_path(branch);
        }
        graph
    }

    /// Register a corridor: every consecutive pair becomes a mutual
    /// neighbor pair. A path shorter than 2 cells adds nothing.
    ///
    /// Re-registering an edge appends duplicate neighbor entries;
    /// the traversal's visited-edge filter tolerates those.
    pub fn register_path(&mut self, path: &[GridCoord]) {
        for pair in path.windows(2) {
            self.add_edge(pair[0], pair[1]);
        }
    }

    fn add_edge(&mut self, a: GridCoord, b: GridCoord) {
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }

    /// Neighbors of a cell in registration order. A cell with no
    /// registered adjacency has zero neighbors (a dead end), not an
    /// error.
    pub fn neighbors(&self, cell: GridCoord) -> &[GridCoord] {
        self.adjacency.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of cells with at least one neighbor.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of registered undirected edges (a duplicate registration
    /// counts again).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Iterate over all cells that appear in the adjacency.
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.adjacency.keys().copied()
    }
}
