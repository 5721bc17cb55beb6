use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;

use crate::pathing_grid::{CellState, PathingGrid};

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Predecessor of every cell a search reached, keyed by dense cell index in discovery order. The
/// start cell has no entry.
pub type Parents = FxIndexMap<usize, usize>;

/// Walks the predecessors back from `goal`, marking every cell strictly between the endpoints as
/// [CellState::Path] and calling `on_step` once per edge. Returns the path from start to goal.
pub fn reconstruct_path<F>(
    grid: &mut PathingGrid,
    parents: &Parents,
    goal: usize,
    on_step: &mut F,
) -> Vec<Point>
where
    F: FnMut(&PathingGrid),
{
    let mut cells =
        std::iter::successors(Some(goal), |ix| parents.get(ix).copied()).collect::<Vec<usize>>();
    for &ix in cells.iter().skip(1) {
        // The start keeps its own tag, mark() leaves endpoints alone.
        grid.mark(ix, CellState::Path);
        on_step(grid);
    }
    cells.reverse();
    cells.into_iter().map(|ix| grid.point_of(ix)).collect()
}

/// Total cost of entering every cell of `path` after the first one.
pub fn path_cost(grid: &PathingGrid, path: &[Point]) -> u32 {
    path.iter()
        .skip(1)
        .filter_map(|&p| grid.weight(p).ok())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_cells_between_endpoints() {
        // |S..G.|
        let mut grid = PathingGrid::parse("S..G.").unwrap();
        let mut parents = Parents::default();
        parents.insert(1, 0);
        parents.insert(2, 1);
        parents.insert(3, 2);
        parents.insert(4, 3);
        let mut steps = 0;
        let path = reconstruct_path(&mut grid, &parents, 3, &mut |_| steps += 1);
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0)
            ]
        );
        assert_eq!(steps, 3);
        assert_eq!(grid.to_string(), "S**G.\n");
    }

    #[test]
    fn adjacent_endpoints_mark_nothing() {
        let mut grid = PathingGrid::parse("SG").unwrap();
        let mut parents = Parents::default();
        parents.insert(1, 0);
        let path = reconstruct_path(&mut grid, &parents, 1, &mut |_| {});
        assert_eq!(path.len(), 2);
        assert_eq!(grid.count(CellState::Path), 0);
        assert_eq!(grid.to_string(), "SG\n");
    }

    #[test]
    fn cost_counts_entered_cells() {
        let grid = PathingGrid::parse("S4.G").unwrap();
        let path = (0..4).map(|x| Point::new(x, 0)).collect::<Vec<_>>();
        assert_eq!(path_cost(&grid, &path), 6);
    }
}
