use crate::error::SearchError;
use crate::DEFAULT_WEIGHT;
use core::fmt;
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Dense cell indices of the (at most four) orthogonal neighbours of a cell.
pub type Neighbors = SmallVec<[usize; 4]>;

/// The single tag a cell carries. Renderers map these onto colors; the engine only compares them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Free,
    Wall,
    Start,
    Goal,
    Frontier,
    Visited,
    Path,
}

impl CellState {
    pub fn is_endpoint(self) -> bool {
        matches!(self, CellState::Start | CellState::Goal)
    }
    /// Tags written by a running search, as opposed to tags painted by the user.
    pub fn is_search_mark(self) -> bool {
        matches!(
            self,
            CellState::Frontier | CellState::Visited | CellState::Path
        )
    }
    pub fn glyph(self) -> char {
        match self {
            CellState::Free => '.',
            CellState::Wall => '#',
            CellState::Start => 'S',
            CellState::Goal => 'G',
            CellState::Frontier => 'o',
            CellState::Visited => 'x',
            CellState::Path => '*',
        }
    }
}

#[derive(Clone, Debug)]
pub struct Cell {
    row: usize,
    col: usize,
    state: CellState,
    weight: u32,
    neighbors: Neighbors,
}

impl Cell {
    fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            state: CellState::Free,
            weight: DEFAULT_WEIGHT,
            neighbors: Neighbors::new(),
        }
    }
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    pub fn state(&self) -> CellState {
        self.state
    }
    /// Cost of entering this cell from any of its neighbours.
    pub fn weight(&self) -> u32 {
        self.weight
    }
    /// Neighbours as of the last [PathingGrid::update_neighbors], ordered down, up, right, left.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }
    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
}

/// [PathingGrid] owns a dense `rows × cols` array of [Cell]s addressed by [Point], where `x` is
/// the column and `y` the row. Neighbour lists are cached per cell and only refreshed by
/// [update_neighbors](Self::update_neighbors), which also regenerates the connected components
/// kept in a [UnionFind] structure.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    components: UnionFind<usize>,
    neighbors_dirty: bool,
}

impl PathingGrid {
    pub fn new(rows: usize, cols: usize) -> PathingGrid {
        let cells = iproduct!(0..rows, 0..cols)
            .map(|(row, col)| Cell::new(row, col))
            .collect::<Vec<_>>();
        PathingGrid {
            rows,
            cols,
            cells,
            components: UnionFind::new(rows * cols),
            neighbors_dirty: true,
        }
    }

    /// Builds a grid from an ASCII layout: `.` free, `#` wall, `S` start, `G` goal and `1`-`9` a
    /// free cell with that weight. Blank lines and surrounding whitespace are ignored.
    pub fn parse(layout: &str) -> Result<PathingGrid, SearchError> {
        let lines = layout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut grid = PathingGrid::new(lines.len(), cols);
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(SearchError::RaggedRow {
                    line: row,
                    expected: cols,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let point = Point::new(col as i32, row as i32);
                match glyph {
                    '.' => {}
                    '#' => grid.set_state(point, CellState::Wall)?,
                    'S' => grid.set_state(point, CellState::Start)?,
                    'G' => grid.set_state(point, CellState::Goal)?,
                    '1'..='9' => grid.set_weight(point, glyph as u32 - '0' as u32)?,
                    _ => {
                        return Err(SearchError::Parse {
                            line: row,
                            column: col,
                            glyph,
                        })
                    }
                }
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.cols
            && (point.y as usize) < self.rows
    }
    /// Dense index of `point`, the identifier used for cells inside searches.
    pub fn index_of(&self, point: Point) -> Result<usize, SearchError> {
        if self.in_bounds(point) {
            Ok(point.y as usize * self.cols + point.x as usize)
        } else {
            Err(SearchError::OutOfBounds { point })
        }
    }
    pub fn point_of(&self, ix: usize) -> Point {
        self.cells[ix].point()
    }
    pub fn cell(&self, point: Point) -> Result<&Cell, SearchError> {
        self.index_of(point).map(|ix| &self.cells[ix])
    }
    pub fn state(&self, point: Point) -> Result<CellState, SearchError> {
        self.cell(point).map(Cell::state)
    }
    pub fn weight(&self, point: Point) -> Result<u32, SearchError> {
        self.cell(point).map(Cell::weight)
    }
    pub(crate) fn cell_at(&self, ix: usize) -> &Cell {
        &self.cells[ix]
    }

    /// Changes the tag of a cell. A cell is at most one of start, goal and wall, and the grid
    /// holds at most one start and one goal; resetting to [CellState::Free] is always allowed.
    pub fn set_state(&mut self, point: Point, requested: CellState) -> Result<(), SearchError> {
        let ix = self.index_of(point)?;
        let current = self.cells[ix].state;
        if current == requested {
            return Ok(());
        }
        let allowed = match requested {
            CellState::Free => true,
            CellState::Wall => !current.is_endpoint(),
            CellState::Start => {
                current != CellState::Wall
                    && current != CellState::Goal
                    && self.find(CellState::Start).is_none()
            }
            CellState::Goal => {
                current != CellState::Wall
                    && current != CellState::Start
                    && self.find(CellState::Goal).is_none()
            }
            CellState::Frontier | CellState::Visited | CellState::Path => {
                !current.is_endpoint() && current != CellState::Wall
            }
        };
        if !allowed {
            return Err(SearchError::InvalidEdit {
                point,
                current,
                requested,
            });
        }
        if current == CellState::Wall || requested == CellState::Wall {
            self.neighbors_dirty = true;
        }
        self.cells[ix].state = requested;
        Ok(())
    }
    pub fn set_start(&mut self, point: Point) -> Result<(), SearchError> {
        self.set_state(point, CellState::Start)
    }
    pub fn set_goal(&mut self, point: Point) -> Result<(), SearchError> {
        self.set_state(point, CellState::Goal)
    }
    pub fn set_wall(&mut self, point: Point) -> Result<(), SearchError> {
        self.set_state(point, CellState::Wall)
    }
    pub fn reset(&mut self, point: Point) -> Result<(), SearchError> {
        self.set_state(point, CellState::Free)
    }
    pub fn set_weight(&mut self, point: Point, weight: u32) -> Result<(), SearchError> {
        if weight == 0 {
            return Err(SearchError::InvalidWeight { point, weight });
        }
        let ix = self.index_of(point)?;
        self.cells[ix].weight = weight;
        Ok(())
    }

    /// Retags a cell on behalf of a running search. Endpoints and walls keep their tag.
    pub(crate) fn mark(&mut self, ix: usize, state: CellState) {
        debug_assert!(state.is_search_mark());
        let cell = &mut self.cells[ix];
        if cell.state == CellState::Free || cell.state.is_search_mark() {
            cell.state = state;
        }
    }
    /// Returns every Frontier, Visited and Path cell to Free, keeping walls, endpoints and weights.
    pub fn clear_search_marks(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.state.is_search_mark()) {
            cell.state = CellState::Free;
        }
    }

    fn find(&self, state: CellState) -> Option<usize> {
        self.cells.iter().position(|c| c.state == state)
    }
    pub fn start(&self) -> Option<Point> {
        self.find(CellState::Start).map(|ix| self.point_of(ix))
    }
    pub fn goal(&self) -> Option<Point> {
        self.find(CellState::Goal).map(|ix| self.point_of(ix))
    }
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state == state).count()
    }

    fn passable(&self, row: usize, col: usize) -> Option<usize> {
        let ix = row * self.cols + col;
        (self.cells[ix].state != CellState::Wall).then_some(ix)
    }
    fn compute_neighbors(&self, row: usize, col: usize) -> Neighbors {
        let mut neighbors = Neighbors::new();
        let candidates = [
            (row + 1 < self.rows).then(|| (row + 1, col)),
            (row > 0).then(|| (row - 1, col)),
            (col + 1 < self.cols).then(|| (row, col + 1)),
            (col > 0).then(|| (row, col - 1)),
        ];
        for (r, c) in candidates.into_iter().flatten() {
            if let Some(ix) = self.passable(r, c) {
                neighbors.push(ix);
            }
        }
        neighbors
    }
    /// Recomputes the neighbour list of every cell from the current wall layout and regenerates
    /// the connected components. Has to run after wall edits for searches to see them.
    pub fn update_neighbors(&mut self) {
        debug!("Updating neighbours of {}x{} grid", self.rows, self.cols);
        for ix in 0..self.cells.len() {
            let neighbors = self.compute_neighbors(self.cells[ix].row, self.cells[ix].col);
            self.cells[ix].neighbors = neighbors;
        }
        self.generate_components();
        self.neighbors_dirty = false;
    }
    /// Whether walls changed since the last [update_neighbors](Self::update_neighbors).
    pub fn neighbors_dirty(&self) -> bool {
        self.neighbors_dirty
    }
    /// The cached orthogonal neighbours of `point`, ordered down, up, right, left.
    pub fn neighbors_of(&self, point: Point) -> Result<SmallVec<[Point; 4]>, SearchError> {
        let cell = self.cell(point)?;
        Ok(cell
            .neighbors
            .iter()
            .map(|&ix| self.point_of(ix))
            .collect())
    }

    /// Generates a new [UnionFind] structure and links up passable grid neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        self.components = UnionFind::new(self.cells.len());
        for (row, col) in iproduct!(0..self.rows, 0..self.cols) {
            let Some(ix) = self.passable(row, col) else {
                continue;
            };
            let down = (row + 1 < self.rows)
                .then(|| self.passable(row + 1, col))
                .flatten();
            let right = (col + 1 < self.cols)
                .then(|| self.passable(row, col + 1))
                .flatten();
            for n in down.into_iter().chain(right) {
                self.components.union(ix, n);
            }
        }
    }
    /// Checks if start and goal are on the same component, as of the last neighbour update.
    pub fn reachable(&self, start: Point, goal: Point) -> bool {
        match (self.index_of(start), self.index_of(goal)) {
            (Ok(s), Ok(g)) => {
                self.cells[s].state != CellState::Wall
                    && self.cells[g].state != CellState::Wall
                    && self.components.equiv(s, g)
            }
            _ => false,
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            let line = row
                .iter()
                .map(|c| match (c.state, c.weight) {
                    (CellState::Free, w @ 2..=9) => char::from_digit(w, 10).unwrap_or('.'),
                    (state, _) => state.glyph(),
                })
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
