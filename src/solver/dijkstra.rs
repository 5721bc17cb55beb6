use crate::solver::{AlgorithmKind, GridSolver};

/// Uniform-cost search: the best-first search of [GridSolver] with a zero heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Dijkstra
    }
}
