use log::warn;

use crate::frontier::FifoFrontier;
use crate::path::{reconstruct_path, Parents};
use crate::pathing_grid::{CellState, Neighbors, PathingGrid};
use crate::solver::{warn_if_stale, AlgorithmKind, GridSolver, SearchOutcome};

/// Breadth-first search. Finds the path with the fewest steps and ignores cell weights entirely,
/// so on weighted grids its path may cost more than the one found by the other solvers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Bfs
    }

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
        warn_if_stale(grid);
        let mut discovered = vec![false; grid.cells().len()];
        let mut parents = Parents::default();
        let mut frontier = FifoFrontier::seeded(start);
        discovered[start] = true;
        while let Some(current) = frontier.pop() {
            if current == goal {
                return SearchOutcome::found(reconstruct_path(grid, &parents, goal, on_step));
            }
            if current != start {
                grid.mark(current, CellState::Visited);
            }
            let neighbors = Neighbors::from_slice(grid.cell_at(current).neighbors());
            for neighbor in neighbors {
                if !discovered[neighbor] {
                    discovered[neighbor] = true;
                    parents.insert(neighbor, current);
                    frontier.push(neighbor);
                    grid.mark(neighbor, CellState::Frontier);
                }
            }
            on_step(grid);
        }
        warn!("Queue emptied before reaching {}", grid.point_of(goal));
        SearchOutcome::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::point::Point;

    fn solve(layout: &str) -> (PathingGrid, SearchOutcome) {
        let mut grid = PathingGrid::parse(layout).unwrap();
        grid.update_neighbors();
        let start = grid.index_of(grid.start().unwrap()).unwrap();
        let goal = grid.index_of(grid.goal().unwrap()).unwrap();
        let outcome = BfsSolver.solve(&mut grid, start, goal, &mut |_| {});
        (grid, outcome)
    }

    /// Heavy cells are walked straight through: BFS only counts steps.
    #[test]
    fn ignores_weights() {
        let (grid, outcome) = solve(
            "
            S9G
            ...
            ",
        );
        assert!(outcome.found);
        assert_eq!(
            outcome.path,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
        assert_eq!(grid.state(Point::new(1, 0)), Ok(CellState::Path));
    }

    /// Down is tried before right, so the path hugs the left edge first.
    #[test]
    fn follows_neighbor_order() {
        let (grid, outcome) = solve(
            "
            S..
            ...
            ..G
            ",
        );
        assert_eq!(outcome.path.len(), 5);
        assert_eq!(outcome.path[1], Point::new(0, 1));
        assert_eq!(grid.count(CellState::Path), 3);
    }

    #[test]
    fn leaves_visited_marks_when_unreachable() {
        let (grid, outcome) = solve(
            "
            S.#G
            ..#.
            ",
        );
        assert!(!outcome.found);
        assert!(outcome.path.is_empty());
        assert_eq!(grid.count(CellState::Visited), 3);
        assert_eq!(grid.count(CellState::Frontier), 0);
        assert_eq!(grid.state(Point::new(0, 0)), Ok(CellState::Start));
    }

    #[test]
    fn calls_back_after_every_expansion() {
        let mut grid = PathingGrid::parse("S.#\n..G").unwrap();
        grid.update_neighbors();
        let mut frames = Vec::new();
        BfsSolver.solve(&mut grid, 0, 5, &mut |g: &PathingGrid| frames.push(g.to_string()));
        // Start, (0,1), (1,0) and (1,1) get expanded before the goal is dequeued, then one frame
        // per path edge.
        assert_eq!(frames.len(), 4 + 3);
        assert_eq!(frames.first().map(String::as_str), Some("So#\no.G\n"));
    }
}
