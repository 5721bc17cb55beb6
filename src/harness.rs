use core::fmt;
use grid_util::point::Point;
use log::{debug, info};
use std::time::{Duration, Instant};

use crate::error::SearchError;
use crate::pathing_grid::{CellState, PathingGrid};
use crate::solver::astar::AstarSolver;
use crate::solver::bfs::BfsSolver;
use crate::solver::dijkstra::DijkstraSolver;
use crate::solver::{AlgorithmKind, GridSolver, SearchOutcome};

/// Metrics of one search run. Counts are read back from the cell tags the search left behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    pub kind: AlgorithmKind,
    pub elapsed: Duration,
    pub found: bool,
    /// Cells tagged [CellState::Visited].
    pub expanded_count: usize,
    /// Steps from start to goal: the [CellState::Path] cells plus the goal, zero without a path.
    pub path_length: usize,
    /// Sum of the weights of the cells counted in `path_length`.
    pub path_cost: u32,
    /// Start to goal inclusive, empty without a path.
    pub path: Vec<Point>,
}

impl RunResult {
    /// Elapsed wall-clock time in seconds, rounded to milliseconds for display.
    pub fn elapsed_secs(&self) -> f64 {
        (self.elapsed.as_secs_f64() * 1000.0).round() / 1000.0
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: time {:.3}s, expanded {}, path length {}",
            self.kind,
            self.elapsed_secs(),
            self.expanded_count,
            self.path_length
        )?;
        if !self.found {
            write!(f, " (no path)")?;
        }
        Ok(())
    }
}

/// Runs the algorithm of the given kind with its default settings. See [run_solver].
pub fn run_search<F>(
    kind: AlgorithmKind,
    grid: &mut PathingGrid,
    start: Point,
    goal: Point,
    on_step: F,
) -> Result<RunResult, SearchError>
where
    F: FnMut(&PathingGrid),
{
    match kind {
        AlgorithmKind::Bfs => run_solver(&BfsSolver, grid, start, goal, on_step),
        AlgorithmKind::Dijkstra => run_solver(&DijkstraSolver, grid, start, goal, on_step),
        AlgorithmKind::AStar => run_solver(&AstarSolver::new(), grid, start, goal, on_step),
    }
}

/// Validates the endpoints, clears the marks of any previous run, recomputes neighbours and runs
/// `solver`, timing it. `on_step` sees the grid after every expansion and path step.
pub fn run_solver<S, F>(
    solver: &S,
    grid: &mut PathingGrid,
    start: Point,
    goal: Point,
    mut on_step: F,
) -> Result<RunResult, SearchError>
where
    S: GridSolver,
    F: FnMut(&PathingGrid),
{
    let start_ix = grid.index_of(start)?;
    let goal_ix = grid.index_of(goal)?;
    if grid.state(start)? != CellState::Start || grid.state(goal)? != CellState::Goal {
        return Err(SearchError::MissingEndpoints);
    }
    grid.clear_search_marks();
    grid.update_neighbors();
    debug!(
        "Running {} from {} to {}, reachable: {}",
        solver.kind(),
        start,
        goal,
        grid.reachable(start, goal)
    );
    let timer = Instant::now();
    let outcome = solver.solve(grid, start_ix, goal_ix, &mut on_step);
    let elapsed = timer.elapsed();
    let result = collect_metrics(solver.kind(), grid, goal, elapsed, outcome);
    info!("{}", result);
    Ok(result)
}

/// Derives the run metrics by scanning the final cell tags.
fn collect_metrics(
    kind: AlgorithmKind,
    grid: &PathingGrid,
    goal: Point,
    elapsed: Duration,
    outcome: SearchOutcome,
) -> RunResult {
    let expanded_count = grid.count(CellState::Visited);
    let (path_cells, mut path_cost) = grid
        .cells()
        .iter()
        .filter(|c| c.state() == CellState::Path)
        .fold((0, 0u32), |(n, cost), c| (n + 1, cost.saturating_add(c.weight())));
    let mut path_length = path_cells;
    if outcome.found {
        path_length += 1;
        path_cost = path_cost.saturating_add(grid.weight(goal).unwrap_or_default());
    }
    debug_assert_eq!(path_length, outcome.path.len().saturating_sub(1));
    RunResult {
        kind,
        elapsed,
        found: outcome.found,
        expanded_count,
        path_length,
        path_cost,
        path: outcome.path,
    }
}
