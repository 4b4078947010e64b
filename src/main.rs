//! VyuhaNav - Maze traversal simulator
//!
//! Animates a line-follower robot driving a fixed maze from start to
//! goal with a wall-following rule (Left > Straight > Right > Back)
//! and edge-visited backtracking. The core advances one transition
//! per step; this binary owns pacing, screen clearing, and logging.

use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use vyuha_nav::{
    AsciiRenderer, MazeGraph, Result, Snapshot, Status, Traversal, VyuhaConfig, VyuhaError,
};

/// Clear the terminal and home the cursor.
const CLEAR: &str = "\x1b[2J\x1b[H";

#[derive(Parser, Debug)]
#[command(name = "vyuha-nav", version, about = "Wall-following maze traversal simulator")]
struct Cli {
    /// Path to a TOML configuration file (defaults to vyuha.toml if present)
    config: Option<PathBuf>,

    /// Milliseconds between steps (overrides config)
    #[arg(long)]
    delay: Option<u64>,

    /// Wait for Enter between steps instead of a timed delay
    #[arg(long)]
    interactive: bool,

    /// Give up after this many steps
    #[arg(long, default_value_t = 10_000)]
    max_steps: usize,

    /// Do not clear the screen between frames
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vyuha_nav=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            VyuhaConfig::load(path)?
        }
        None if PathBuf::from("vyuha.toml").exists() => {
            info!("Loading configuration from vyuha.toml");
            VyuhaConfig::load(&PathBuf::from("vyuha.toml"))?
        }
        None => {
            info!("Using built-in maze layout");
            VyuhaConfig::default()
        }
    };
    config.maze.validate()?;

    if let Some(delay) = cli.delay {
        config.display.step_delay_ms = delay;
    }
    if cli.interactive {
        config.display.interactive = true;
    }

    info!("VyuhaNav v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Maze {}x{}, start {}, goal {}",
        config.maze.rows, config.maze.cols, config.maze.start, config.maze.goal
    );

    let graph = MazeGraph::from_layout(&config.maze);
    info!(
        "Graph: {} cells, {} passages",
        graph.node_count(),
        graph.edge_count()
    );

    let renderer = AsciiRenderer::new(&config.maze);
    let mut traversal = Traversal::new(&graph, config.maze.start, config.maze.goal);

    // Show the starting frame before the robot moves.
    draw(&renderer, &cli, traversal.position());
    std::thread::sleep(Duration::from_millis(config.display.initial_pause_ms));

    let mut steps = 0;
    while !traversal.is_finished() && steps < cli.max_steps {
        let snap = traversal.step();
        steps += 1;

        draw(&renderer, &cli, snap.position);
        print_step(&snap);

        if !traversal.is_finished() {
            pause(&config)?;
        }
    }

    match traversal.status() {
        Status::GoalReached => {
            println!("Reached goal {} in {} steps.", config.maze.goal, steps);
            Ok(())
        }
        Status::Exhausted => {
            println!("Maze exhausted after {} steps; goal never reached.", steps);
            Ok(())
        }
        Status::InProgress => Err(VyuhaError::Maze(format!(
            "Traversal still in progress after {} steps",
            steps
        ))),
    }
}

fn draw(renderer: &AsciiRenderer, cli: &Cli, position: vyuha_nav::GridCoord) {
    if !cli.no_clear {
        print!("{}", CLEAR);
    }
    print!("{}", renderer.frame(position));
}

fn print_step(snap: &Snapshot) {
    println!(
        "Current node: {}  stack: {}  visited passages: {}",
        snap.node, snap.stack_depth, snap.visited_edges
    );
}

/// Block until the next step is due: Enter in interactive mode, a
/// timed delay otherwise.
fn pause(config: &VyuhaConfig) -> Result<()> {
    if config.display.interactive {
        println!("Press ENTER to continue...");
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
    } else {
        std::thread::sleep(Duration::from_millis(config.display.step_delay_ms));
    }
    Ok(())
}
