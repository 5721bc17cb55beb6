use grid_util::point::Point;
use thiserror::Error;

use crate::pathing_grid::CellState;

/// Everything that can go wrong when editing a grid or starting a search. Not finding a path is
/// not an error: it is reported through [RunResult::found](crate::RunResult::found).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("a search needs both a start and a goal cell")]
    MissingEndpoints,
    #[error("cell {point} lies outside the grid")]
    OutOfBounds { point: Point },
    #[error("cannot mark cell {point} as {requested:?} while it is {current:?}")]
    InvalidEdit {
        point: Point,
        current: CellState,
        requested: CellState,
    },
    #[error("cell {point} cannot have weight {weight}, weights start at 1")]
    InvalidWeight { point: Point, weight: u32 },
    #[error("unexpected glyph {glyph:?} at line {line}, column {column}")]
    Parse {
        line: usize,
        column: usize,
        glyph: char,
    },
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}
