//! Depth-first maze traversal with edge-visited backtracking.
//!
//! The traversal keeps an explicit stack of frames instead of using
//! recursion, so a driving loop can advance it one transition at a
//! time with [`Traversal::step`], pause between steps, and stop at
//! any step boundary without corrupting state. Visited passages are
//! tracked as canonical undirected edges: a passage is consumed the
//! first time it is taken in either direction, which is what keeps
//! loop branches from trapping the robot.

use std::collections::HashSet;

use crate::coord::{Edge, GridCoord};
use crate::graph::MazeGraph;
use crate::turn::Turn;

/// One stack entry: a node and the node it was entered from.
///
/// `arrived_from` is `None` only for the initial frame, where the
/// robot has no heading yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub node: GridCoord,
    pub arrived_from: Option<GridCoord>,
}

/// Terminal state of a traversal run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Still stepping
    InProgress,
    /// The goal frame was reached
    GoalReached,
    /// Every reachable passage was consumed without reaching the goal
    Exhausted,
}

/// Read-only view of the traversal after one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Node that was examined this step
    pub node: GridCoord,
    /// Robot position after the step
    pub position: GridCoord,
    /// Stack depth after the step
    pub stack_depth: usize,
    /// Total visited passages after the step
    pub visited_edges: usize,
    /// Traversal status after the step
    pub status: Status,
}

/// Stack-based DFS over a [`MazeGraph`] with Left > Straight > Right
/// > Back move preference.
pub struct Traversal<'g> {
    graph: &'g MazeGraph,
    goal: GridCoord,
    stack: Vec<Frame>,
    visited: HashSet<Edge>,
    position: GridCoord,
    status: Status,
}

impl<'g> Traversal<'g> {
    /// Start a traversal at `start`, driving toward `goal`.
    pub fn new(graph: &'g MazeGraph, start: GridCoord, goal: GridCoord) -> Self {
        Self {
            graph,
            goal,
            stack: vec![Frame {
                node: start,
                arrived_from: None,
            }],
            visited: HashSet::new(),
            position: start,
            status: Status::InProgress,
        }
    }

    /// Advance exactly one transition and return the new snapshot.
    ///
    /// After a terminal status this is a no-op returning the terminal
    /// snapshot, so an over-eager driving loop cannot corrupt state.
    pub fn step(&mut self) -> Snapshot {
        if self.status != Status::InProgress {
            return self.snapshot(self.position);
        }

        let frame = match self.stack.last() {
            Some(&f) => f,
            None => {
                self.status = Status::Exhausted;
                return self.snapshot(self.position);
            }
        };

        if frame.node == self.goal {
            self.position = frame.node;
            self.status = Status::GoalReached;
            self.stack.pop();
            tracing::info!("Goal {} reached", self.goal);
            return self.snapshot(frame.node);
        }

        let mut candidates: Vec<GridCoord> = self
            .graph
            .neighbors(frame.node)
            .iter()
            .copied()
            .filter(|&n| !self.visited.contains(&Edge::between(frame.node, n)))
            .collect();

        if candidates.is_empty() {
            // Dead end: every passage at this node is consumed.
            self.stack.pop();
            match self.stack.last() {
                Some(top) => {
                    self.position = top.node;
                    tracing::debug!("Backtracking from {} to {}", frame.node, top.node);
                }
                None => {
                    self.status = Status::Exhausted;
                    tracing::warn!("Maze exhausted without reaching goal {}", self.goal);
                }
            }
        } else {
            // Stable sort: priority ties keep adjacency insertion order.
            candidates.sort_by_key(|&n| Turn::classify(frame.arrived_from, frame.node, n));

            let next = candidates[0];
            self.visited.insert(Edge::between(frame.node, next));
            self.stack.push(Frame {
                node: next,
                arrived_from: Some(frame.node),
            });
            self.position = next;
            tracing::debug!(
                "Advance {} -> {} ({:?})",
                frame.node,
                next,
                Turn::classify(frame.arrived_from, frame.node, next)
            );
        }

        self.snapshot(frame.node)
    }

    /// Drive [`step`](Self::step) until a terminal status, capped at
    /// `max_steps` transitions. Returns the final status, which is
    /// still `InProgress` if the cap was hit first.
    pub fn run(&mut self, max_steps: usize) -> Status {
        for _ in 0..max_steps {
            if self.is_finished() {
                break;
            }
            self.step();
        }
        self.status
    }

    /// Robot position after the most recent step.
    pub fn position(&self) -> GridCoord {
        self.position
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// True once a terminal status is reached.
    pub fn is_finished(&self) -> bool {
        self.status != Status::InProgress
    }

    /// Current stack depth.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of passages consumed so far.
    pub fn visited_edge_count(&self) -> usize {
        self.visited.len()
    }

    fn snapshot(&self, node: GridCoord) -> Snapshot {
        Snapshot {
            node,
            position: self.position,
            stack_depth: self.stack.len(),
            visited_edges: self.visited.len(),
            status: self.status,
        }
    }
}
