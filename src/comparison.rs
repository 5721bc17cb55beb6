use grid_util::point::Point;
use log::debug;

use crate::error::SearchError;
use crate::harness::{run_search, RunResult};
use crate::pathing_grid::{CellState, PathingGrid};
use crate::solver::AlgorithmKind;
use crate::{DEFAULT_COLS, DEFAULT_ROWS};

/// A pointer action on the comparison board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Places the start, then the goal, then walls.
    Paint,
    /// Returns the cell to free, forgetting the start or goal if it was one.
    Erase,
}

/// Three grids with the same painted layout, one per [AlgorithmKind], so the algorithms can be
/// run and displayed side by side. Results are kept per panel until the layout changes.
#[derive(Clone, Debug)]
pub struct Comparison {
    grids: [PathingGrid; 3],
    start: Option<Point>,
    goal: Option<Point>,
    results: [Option<RunResult>; 3],
}

impl Default for Comparison {
    fn default() -> Self {
        Comparison::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Comparison {
    pub fn new(rows: usize, cols: usize) -> Comparison {
        Comparison {
            grids: std::array::from_fn(|_| PathingGrid::new(rows, cols)),
            start: None,
            goal: None,
            results: Default::default(),
        }
    }
    pub fn grid(&self, kind: AlgorithmKind) -> &PathingGrid {
        &self.grids[kind.panel()]
    }
    pub fn grids(&self) -> &[PathingGrid; 3] {
        &self.grids
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }
    pub fn result(&self, kind: AlgorithmKind) -> Option<&RunResult> {
        self.results[kind.panel()].as_ref()
    }
    /// Results in BFS, Dijkstra, A* order; `None` for panels not run since the last edit.
    pub fn results(&self) -> &[Option<RunResult>; 3] {
        &self.results
    }

    fn set_all(&mut self, point: Point, state: CellState) -> Result<(), SearchError> {
        for grid in self.grids.iter_mut() {
            grid.set_state(point, state)?;
        }
        Ok(())
    }

    /// Applies a pointer edit to all three grids.
    pub fn apply_edit(&mut self, point: Point, edit: Edit) -> Result<(), SearchError> {
        let current = self.grids[0].state(point)?;
        let here = Some(point);
        match edit {
            Edit::Paint => {
                let passable = current != CellState::Wall;
                let target = if self.start.is_none() && passable && here != self.goal {
                    CellState::Start
                } else if self.goal.is_none() && passable && here != self.start {
                    CellState::Goal
                } else if here != self.start && here != self.goal {
                    CellState::Wall
                } else {
                    return Ok(());
                };
                self.set_all(point, target)?;
                match target {
                    CellState::Start => self.start = here,
                    CellState::Goal => self.goal = here,
                    _ => {}
                }
            }
            Edit::Erase => {
                self.set_all(point, CellState::Free)?;
                if self.start == here {
                    self.start = None;
                }
                if self.goal == here {
                    self.goal = None;
                }
            }
        }
        self.results = Default::default();
        Ok(())
    }

    /// Sets the weight of a cell on all three grids.
    pub fn set_weight(&mut self, point: Point, weight: u32) -> Result<(), SearchError> {
        for grid in self.grids.iter_mut() {
            grid.set_weight(point, weight)?;
        }
        self.results = Default::default();
        Ok(())
    }

    /// Runs BFS, Dijkstra and A* one after the other, each on its own grid. `on_step` is told
    /// which algorithm is running and gets the grid it is working on.
    pub fn run_all<F>(&mut self, mut on_step: F) -> Result<&[Option<RunResult>; 3], SearchError>
    where
        F: FnMut(AlgorithmKind, &PathingGrid),
    {
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            return Err(SearchError::MissingEndpoints);
        };
        for kind in AlgorithmKind::ALL {
            debug!("Comparison: running {}", kind);
            let result = run_search(kind, &mut self.grids[kind.panel()], start, goal, |grid| {
                on_step(kind, grid)
            })?;
            self.results[kind.panel()] = Some(result);
        }
        Ok(&self.results)
    }

    /// Discards all three grids and starts over with empty ones of the same size.
    pub fn reset(&mut self) {
        let (rows, cols) = (self.grids[0].rows(), self.grids[0].cols());
        *self = Comparison::new(rows, cols);
    }

    /// The three stat lines shown under a panel, with `--` for a panel that has not run.
    pub fn stats(&self, kind: AlgorithmKind) -> [String; 3] {
        match self.result(kind) {
            Some(r) => [
                format!("Time: {:.3}s", r.elapsed_secs()),
                format!("Expanded: {}", r.expanded_count),
                format!("Path Length: {}", r.path_length),
            ],
            None => [
                "Time: --".to_owned(),
                "Expanded: --".to_owned(),
                "Path Length: --".to_owned(),
            ],
        }
    }
}
