//! End-to-end traversal tests over the built-in maze layout.
//!
//! The expected position sequences here are the observable contract:
//! the robot prefers Left over Straight over Right over Back, takes
//! each passage at most once, and backtracks out of dead ends. Any
//! change to candidate ordering, tie-breaking, or edge canonicalization
//! shows up as a diff against these sequences.

use vyuha_nav::{GridCoord, MazeGraph, MazeLayout, Snapshot, Status, Traversal, VyuhaConfig};

fn c(row: i32, col: i32) -> GridCoord {
    GridCoord::new(row, col)
}

fn run_to_end(graph: &MazeGraph, start: GridCoord, goal: GridCoord) -> Vec<Snapshot> {
    let mut traversal = Traversal::new(graph, start, goal);
    let mut snaps = Vec::new();
    while !traversal.is_finished() {
        snaps.push(traversal.step());
        assert!(snaps.len() < 10_000, "traversal did not terminate");
    }
    snaps
}

#[test]
fn default_maze_full_position_sequence() {
    let layout = MazeLayout::default();
    let graph = MazeGraph::from_layout(&layout);
    let snaps = run_to_end(&graph, layout.start, layout.goal);

    let positions: Vec<GridCoord> = snaps.iter().map(|s| s.position).collect();
    let expected: Vec<GridCoord> = [
        // Up the west corridor, then east along the top.
        (7, 1),
        (6, 1),
        (5, 1),
        (4, 1),
        (3, 1),
        (2, 1),
        (1, 1),
        (1, 2),
        (1, 3),
        // Left branch to (0,3): dead end, back out.
        (0, 3),
        (1, 3),
        (1, 4),
        (1, 5),
        // Left branch to (0,5): dead end, back out.
        (0, 5),
        (1, 5),
        // South along the middle corridor, then around the bottom bend.
        (2, 5),
        (3, 5),
        (4, 5),
        (5, 5),
        (6, 5),
        (6, 6),
        (6, 7),
        // North up the east corridor.
        (5, 7),
        (4, 7),
        (3, 7),
        (2, 7),
        // Left branch through (2,6) to (1,6): dead end, back out twice.
        (2, 6),
        (1, 6),
        (2, 6),
        (2, 7),
        // Final run to the goal.
        (1, 7),
        (1, 8),
        (1, 9),
        (1, 10),
        (1, 10),
    ]
    .iter()
    .map(|&p| GridCoord::from(p))
    .collect();

    assert_eq!(positions, expected);

    let last = snaps.last().unwrap();
    assert_eq!(last.status, Status::GoalReached);
    assert_eq!(last.visited_edges, 30);
    assert_eq!(last.stack_depth, 26);
}

#[test]
fn default_maze_graph_shape() {
    let layout = MazeLayout::default();
    let graph = MazeGraph::from_layout(&layout);

    assert_eq!(graph.node_count(), 46);
    assert_eq!(graph.edge_count(), 46);

    // Symmetry over the whole layout.
    for cell in graph.cells().collect::<Vec<_>>() {
        for &nbr in graph.neighbors(cell) {
            assert!(graph.neighbors(nbr).contains(&cell));
        }
    }
}

#[test]
fn visited_growth_and_stack_depth_invariants() {
    let layout = MazeLayout::default();
    let graph = MazeGraph::from_layout(&layout);
    let snaps = run_to_end(&graph, layout.start, layout.goal);

    let mut prev_visited = 0;
    for snap in &snaps {
        let grew = snap.visited_edges - prev_visited;
        assert!(grew <= 1, "visited edges grew by {} in one step", grew);
        prev_visited = snap.visited_edges;

        if snap.status == Status::InProgress {
            assert!(snap.stack_depth >= 1);
        }
    }
}

#[test]
fn identical_runs_produce_identical_snapshots() {
    let layout = MazeLayout::default();
    let graph = MazeGraph::from_layout(&layout);

    let first = run_to_end(&graph, layout.start, layout.goal);
    let second = run_to_end(&graph, layout.start, layout.goal);
    assert_eq!(first, second);
}

#[test]
fn unreachable_goal_exhausts_cleanly() {
    let layout = MazeLayout::default();
    let graph = MazeGraph::from_layout(&layout);

    // (0,0) is not on any corridor.
    let snaps = run_to_end(&graph, layout.start, c(0, 0));
    let last = snaps.last().unwrap();

    assert_eq!(last.status, Status::Exhausted);
    assert_eq!(last.stack_depth, 0);
    // Every passage gets consumed before the robot gives up.
    assert_eq!(last.visited_edges, graph.edge_count());
}

#[test]
fn traversal_resumes_across_interleaved_reads() {
    // A driving loop may stop and inspect state between any two steps.
    let layout = MazeLayout::default();
    let graph = MazeGraph::from_layout(&layout);

    let mut traversal = Traversal::new(&graph, layout.start, layout.goal);
    let mut stitched = Vec::new();
    while !traversal.is_finished() {
        // Reads between steps must not perturb the run.
        let _ = traversal.position();
        let _ = traversal.stack_depth();
        let _ = traversal.visited_edge_count();
        stitched.push(traversal.step());
        assert!(stitched.len() < 10_000);
    }

    assert_eq!(stitched, run_to_end(&graph, layout.start, layout.goal));
}

#[test]
fn config_driven_maze_traverses() {
    let toml_src = r#"
        [maze]
        rows = 9
        cols = 3
        start = [8, 1]
        goal = [6, 1]
        main_path = [[8, 1], [7, 1], [6, 1]]
    "#;

    let config: VyuhaConfig = toml::from_str(toml_src).unwrap();
    config.maze.validate().unwrap();

    let graph = MazeGraph::from_layout(&config.maze);
    let snaps = run_to_end(&graph, config.maze.start, config.maze.goal);

    let positions: Vec<GridCoord> = snaps.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![c(7, 1), c(6, 1), c(6, 1)]);
    assert_eq!(snaps.last().unwrap().status, Status::GoalReached);
}
