//! # VyuhaNav: Wall-Following Maze Traversal
//!
//! A deterministic maze-traversal simulator for a line-follower robot.
//! The maze is a graph of corridor cells; at every junction the robot
//! prefers Left, then Straight, then Right, then Back relative to its
//! incoming heading, consuming each passage at most once and
//! backtracking when a node has nothing left to offer.
//!
//! This is intentionally not a shortest-path planner: it reproduces
//! one specific exploration order, the one a physical wall-following
//! line robot would drive.
//!
//! ## Quick Start
//!
//! ```rust
//! use vyuha_nav::{MazeGraph, MazeLayout, Status, Traversal};
//!
//! // The built-in 9x12 course
//! let layout = MazeLayout::default();
//! let graph = MazeGraph::from_layout(&layout);
//!
//! let mut traversal = Traversal::new(&graph, layout.start, layout.goal);
//! assert_eq!(traversal.run(10_000), Status::GoalReached);
//! assert_eq!(traversal.position(), layout.goal);
//! ```
//!
//! ## Architecture
//!
//! - [`coord`]: cell coordinates and canonical undirected edges
//! - [`graph`]: adjacency built from corridor paths
//! - [`turn`]: Left/Straight/Right/Back classification
//! - [`traversal`]: the explicit-stack DFS state machine
//! - [`config`]: maze layout and pacing configuration (TOML)
//! - [`render`]: read-only ASCII frame rendering
//!
//! The traversal is single-threaded and advances only through
//! [`Traversal::step`]; the driving loop owns all pacing and screen
//! handling, and may stop calling `step` at any boundary.

pub mod config;
pub mod coord;
pub mod error;
pub mod graph;
pub mod render;
pub mod traversal;
pub mod turn;

pub use config::{DisplayConfig, MazeLayout, VyuhaConfig};
pub use coord::{Edge, GridCoord};
pub use error::{Result, VyuhaError};
pub use graph::MazeGraph;
pub use render::AsciiRenderer;
pub use traversal::{Frame, Snapshot, Status, Traversal};
pub use turn::Turn;
