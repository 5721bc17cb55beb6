//! # grid_search_compare
//!
//! Runs [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with a Manhattan heuristic on a
//! 4-connected grid of free, wall and weighted cells, so the three can be compared on the same
//! layout. Searches tag the cells they touch (frontier, visited, path) and call back after every
//! step, which lets a renderer animate them; the metrics of a run (time, expanded cells, path
//! length) are read back from those tags.
//!
//! Entering a cell costs its weight. BFS ignores weights and finds the path with the fewest steps,
//! Dijkstra and A* find the cheapest one.
pub mod comparison;
pub mod error;
pub mod frontier;
pub mod harness;
pub mod path;
pub mod pathing_grid;
pub mod solver;

pub use comparison::{Comparison, Edit};
pub use error::SearchError;
pub use harness::{run_search, run_solver, RunResult};
pub use pathing_grid::{Cell, CellState, PathingGrid};
pub use solver::{AlgorithmKind, GridSolver, SearchOutcome};

/// Grid height used by [Comparison::default].
pub const DEFAULT_ROWS: usize = 25;
/// Grid width used by [Comparison::default].
pub const DEFAULT_COLS: usize = 25;
/// Weight of a freshly built cell.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Builds a `rows × cols` grid of free cells of weight [DEFAULT_WEIGHT].
pub fn build_grid(rows: usize, cols: usize) -> PathingGrid {
    PathingGrid::new(rows, cols)
}
