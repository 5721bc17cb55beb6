use crate::pathing_grid::PathingGrid;
use crate::solver::{AlgorithmKind, GridSolver};

/// A* with the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) to the goal
/// as heuristic. Every weight is at least 1, so the unscaled heuristic never overestimates and
/// the paths found cost as little as Dijkstra's.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. Values above 1.0 expand fewer cells but give up optimality.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::AStar
    }

    /// Just the Manhattan distance times a heuristic factor.
    fn heuristic(&self, grid: &PathingGrid, cell: usize, goal: usize) -> u32 {
        let distance = grid.point_of(cell).manhattan_distance(&grid.point_of(goal)) as u32;
        (distance as f32 * self.heuristic_factor) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::run_solver;
    use crate::path::path_cost;
    use crate::pathing_grid::CellState;
    use crate::solver::dijkstra::DijkstraSolver;
    use grid_util::point::Point;

    fn solve_with<S: GridSolver>(solver: &S, layout: &str) -> (PathingGrid, Vec<Point>) {
        let mut grid = PathingGrid::parse(layout).unwrap();
        grid.update_neighbors();
        let start = grid.index_of(grid.start().unwrap()).unwrap();
        let goal = grid.index_of(grid.goal().unwrap()).unwrap();
        let outcome = solver.solve(&mut grid, start, goal, &mut |_| {});
        (grid, outcome.path)
    }

    #[test]
    fn heuristic_is_scaled_manhattan() {
        let mut grid = PathingGrid::new(5, 5);
        grid.update_neighbors();
        let goal = grid.index_of(Point::new(4, 4)).unwrap();
        let corner = grid.index_of(Point::new(0, 0)).unwrap();
        let inner = grid.index_of(Point::new(3, 1)).unwrap();
        assert_eq!(AstarSolver::new().heuristic(&grid, corner, goal), 8);
        assert_eq!(AstarSolver::new().heuristic(&grid, inner, goal), 4);
        let inflated = AstarSolver {
            heuristic_factor: 1.5,
        };
        assert_eq!(inflated.heuristic(&grid, corner, goal), 12);
        assert_eq!(inflated.heuristic(&grid, inner, goal), 6);
        assert_eq!(inflated.heuristic(&grid, goal, goal), 0);
    }

    /// On an open corridor the heuristic leads straight to the goal.
    #[test]
    fn expands_only_the_straight_line() {
        let layout = "
            .....
            S...G
            .....
            ";
        let (grid, path) = solve_with(&AstarSolver::new(), layout);
        assert_eq!(path.len(), 5);
        // The three expanded cells all end up on the path.
        assert_eq!(grid.count(CellState::Visited), 0);
        assert_eq!(grid.count(CellState::Path), 3);
        assert_eq!(grid.count(CellState::Frontier), 8);

        let (dijkstra_grid, _) = solve_with(&DijkstraSolver, layout);
        assert!(dijkstra_grid.count(CellState::Visited) > 3);
    }

    #[test]
    fn finds_cheapest_path_on_weighted_grid() {
        let layout = "
            S.9..
            .#9#.
            ..1.G
            ";
        let (astar_grid, astar_path) = solve_with(&AstarSolver::new(), layout);
        let (dijkstra_grid, dijkstra_path) = solve_with(&DijkstraSolver, layout);
        assert_eq!(
            path_cost(&astar_grid, &astar_path),
            path_cost(&dijkstra_grid, &dijkstra_path)
        );
        assert_eq!(path_cost(&astar_grid, &astar_path), 6);
    }

    /// (1,1) is first reached at cost 3 through the heavy cell, then at cost 2 from the left. The
    /// older heap entry ties on estimate with (2,1) and pops first, and must not be expanded again.
    #[test]
    fn skips_superseded_heap_entries() {
        let mut grid = PathingGrid::parse(
            "
            S2#G
            ..2.
            ",
        )
        .unwrap();
        let mut frames = 0;
        let result = run_solver(
            &AstarSolver::new(),
            &mut grid,
            Point::new(0, 0),
            Point::new(3, 0),
            |_| frames += 1,
        )
        .unwrap();
        assert!(result.found);
        assert_eq!(
            result.path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(3, 0),
            ]
        );
        assert_eq!(result.path_cost, 6);
        assert_eq!(result.expanded_count, 1);
        assert_eq!(grid.state(Point::new(1, 0)), Ok(CellState::Visited));
        // Six expansions, then one frame per path edge.
        assert_eq!(frames, 6 + 5);
    }

    /// The goal walled off: every cell reachable from the start is expanded.
    #[test]
    fn exhausts_reachable_cells_without_path() {
        let (grid, path) = solve_with(
            &AstarSolver::new(),
            "
            S...
            ..#.
            .#G#
            ",
        );
        assert!(path.is_empty());
        assert_eq!(grid.count(CellState::Visited), 7);
    }

    #[test]
    fn inflated_heuristic_still_reaches_goal() {
        let solver = AstarSolver {
            heuristic_factor: 2.0,
        };
        let (_, path) = solve_with(
            &solver,
            "
            S....
            .###.
            ....G
            ",
        );
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(4, 2)));
        assert_eq!(path.len(), 7);
    }
}
