use crate::config::MAX_DIMENSION;
use crate::{GameError, Position};
use ndarray::Array2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    Empty,
    Mine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Closed,
    Open,
    Flagged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub content: Content,
    pub state: CellState,
}

impl Cell {
    pub fn is_mine(&self) -> bool {
        self.content == Content::Mine
    }

    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }
}

/// Row-major grid of cells. Mine and closed-cell counters are kept in step
/// with every write so they never need a full scan.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mines_count: usize,
    closed_count: usize,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(GameError::BoardTooLarge {
                rows,
                cols,
                max: MAX_DIMENSION,
            });
        }

        Ok(Board {
            cells: Array2::default((rows, cols)),
            mines_count: 0,
            closed_count: rows * cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a board has at least one row and one column.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn cell(&self, pos: Position) -> Cell {
        self.check_bounds(pos);
        self.cells[[pos.row, pos.col]]
    }

    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn content(&self, pos: Position) -> Content {
        self.cell(pos).content
    }

    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn state(&self, pos: Position) -> CellState {
        self.cell(pos).state
    }

    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn set_content(&mut self, pos: Position, content: Content) {
        self.check_bounds(pos);
        let cell = &mut self.cells[[pos.row, pos.col]];
        match (cell.content, content) {
            (Content::Empty, Content::Mine) => self.mines_count += 1,
            (Content::Mine, Content::Empty) => self.mines_count -= 1,
            _ => {}
        }
        cell.content = content;
    }

    /// # Panics
    ///
    /// Panics if `pos` lies outside the board.
    pub fn set_state(&mut self, pos: Position, state: CellState) {
        self.check_bounds(pos);
        let cell = &mut self.cells[[pos.row, pos.col]];
        match (cell.is_open(), state == CellState::Open) {
            (false, true) => self.closed_count -= 1,
            (true, false) => self.closed_count += 1,
            _ => {}
        }
        cell.state = state;
    }

    /// Resets every cell's content to `Empty`, leaving visibility untouched.
    pub fn clear_mines(&mut self) {
        self.cells
            .iter_mut()
            .for_each(|cell| cell.content = Content::Empty);
        self.mines_count = 0;
    }

    pub fn count_neighbor_mines(&self, pos: Position) -> u8 {
        self.check_bounds(pos);
        pos.neighbors(self.rows(), self.cols())
            .filter(|p| self.cells[[p.row, p.col]].is_mine())
            .count() as u8
    }

    pub fn mines_count(&self) -> usize {
        self.mines_count
    }

    /// Number of cells that are not open (closed or flagged).
    pub fn closed_count(&self) -> usize {
        self.closed_count
    }

    pub fn is_mine_open(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_mine() && cell.is_open())
    }

    pub fn reveal_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine()) {
            if !cell.is_open() {
                cell.state = CellState::Open;
                self.closed_count -= 1;
            }
        }
    }

    /// Opens every cell that does not hold a mine.
    pub fn reveal_safe_cells(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| !cell.is_mine()) {
            if !cell.is_open() {
                cell.state = CellState::Open;
                self.closed_count -= 1;
            }
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (rows, cols) = self.dimensions();
        (0..rows * cols).map(move |i| Position::new(i / cols, i % cols))
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine())
            .map(|((row, col), _)| Position::new(row, col))
    }

    /// Converts a row-major linear index into a board position.
    pub(crate) fn position_of(&self, index: usize) -> Position {
        Position::new(index / self.cols(), index % self.cols())
    }

    fn check_bounds(&self, pos: Position) {
        assert!(
            self.is_within_bounds(pos),
            "position {:?} is out of bounds for a {}x{} board",
            pos,
            self.rows(),
            self.cols()
        );
    }
}
