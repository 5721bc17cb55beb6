use crate::frontier::PriorityFrontier;
use crate::path::{reconstruct_path, Parents};
use crate::pathing_grid::{CellState, Neighbors, PathingGrid};
use core::fmt;
use grid_util::point::Point;
use log::warn;

pub mod astar;
pub mod bfs;
pub mod dijkstra;

/// The three strategies the engine compares, in the order they are presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bfs,
    Dijkstra,
    AStar,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Bfs,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bfs => "BFS",
            AlgorithmKind::Dijkstra => "Dijkstra",
            AlgorithmKind::AStar => "A*",
        }
    }
    /// Position of this algorithm in [ALL](Self::ALL).
    pub fn panel(self) -> usize {
        match self {
            AlgorithmKind::Bfs => 0,
            AlgorithmKind::Dijkstra => 1,
            AlgorithmKind::AStar => 2,
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a search returns besides the marks it leaves on the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub found: bool,
    /// Start to goal inclusive, empty when no path was found.
    pub path: Vec<Point>,
}

impl SearchOutcome {
    pub(crate) fn found(path: Vec<Point>) -> SearchOutcome {
        SearchOutcome { found: true, path }
    }
}

pub trait GridSolver {
    fn kind(&self) -> AlgorithmKind;

    /// Lower bound on the cost of reaching `goal` from `cell`. Zero unless overridden.
    fn heuristic(&self, _grid: &PathingGrid, _cell: usize, _goal: usize) -> u32 {
        0
    }

    /// Searches from `start` to `goal` (dense cell indices), tagging cells as the search goes and
    /// calling `on_step` after every expansion and every reconstruction step. Uses the neighbour
    /// lists of the last [PathingGrid::update_neighbors].
    ///
    /// The default is a best-first search ordered by `cost + heuristic`, ties going to the cell
    /// scheduled first.
    fn solve<F>(
        &self,
        grid: &mut PathingGrid,
        start: usize,
        goal: usize,
        on_step: &mut F,
    ) -> SearchOutcome
    where
        F: FnMut(&PathingGrid),
    {
        best_first(
            grid,
            start,
            goal,
            |grid, cell| self.heuristic(grid, cell, goal),
            on_step,
        )
    }
}

pub(crate) fn warn_if_stale(grid: &PathingGrid) {
    if grid.neighbors_dirty() {
        warn!("Searching with neighbour lists that predate the latest wall edits");
    }
}

/// Uniform-cost search guided by `heuristic`. Each cell gets a best-known cost; improving it
/// re-schedules the cell with a fresh sequence number and leaves the old heap entry behind, to be
/// skipped when popped. Expanded cells are final and never re-enter the frontier.
fn best_first<FH, F>(
    grid: &mut PathingGrid,
    start: usize,
    goal: usize,
    mut heuristic: FH,
    on_step: &mut F,
) -> SearchOutcome
where
    FH: FnMut(&PathingGrid, usize) -> u32,
    F: FnMut(&PathingGrid),
{
    warn_if_stale(grid);
    let n = grid.cells().len();
    let mut best_cost: Vec<Option<u32>> = vec![None; n];
    let mut expanded = vec![false; n];
    let mut parents = Parents::default();
    best_cost[start] = Some(0);
    let mut frontier = PriorityFrontier::seeded(start, heuristic(grid, start));
    while let Some((current, cost)) = frontier.pop() {
        if expanded[current] || best_cost[current].is_some_and(|best| cost > best) {
            continue;
        }
        if current == goal {
            return SearchOutcome::found(reconstruct_path(grid, &parents, goal, on_step));
        }
        expanded[current] = true;
        if current != start {
            grid.mark(current, CellState::Visited);
        }
        let neighbors = Neighbors::from_slice(grid.cell_at(current).neighbors());
        for neighbor in neighbors {
            if expanded[neighbor] {
                continue;
            }
            let new_cost = cost.saturating_add(grid.cell_at(neighbor).weight());
            if best_cost[neighbor].map_or(true, |best| new_cost < best) {
                best_cost[neighbor] = Some(new_cost);
                parents.insert(neighbor, current);
                let estimate = new_cost.saturating_add(heuristic(grid, neighbor));
                frontier.push(neighbor, new_cost, estimate);
                grid.mark(neighbor, CellState::Frontier);
            }
        }
        on_step(grid);
    }
    warn!(
        "Frontier exhausted before reaching {}",
        grid.point_of(goal)
    );
    SearchOutcome::default()
}
