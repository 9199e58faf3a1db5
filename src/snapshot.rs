use crate::{Board, CellState, Content, Position};
use ndarray::Array2;

/// What a single cell looks like to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Closed,
    Flagged,
    OpenMine,
    /// Open empty cell with the number of neighboring mines.
    OpenEmpty(u8),
}

impl Tile {
    fn of(board: &Board, pos: Position) -> Self {
        let cell = board.cell(pos);
        match (cell.state, cell.content) {
            (CellState::Closed, _) => Tile::Closed,
            (CellState::Flagged, _) => Tile::Flagged,
            (CellState::Open, Content::Mine) => Tile::OpenMine,
            (CellState::Open, Content::Empty) => Tile::OpenEmpty(board.count_neighbor_mines(pos)),
        }
    }
}

/// Read-only view of a game, detached from the board it was taken from.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    tiles: Array2<Tile>,
    cursor: Position,
}

impl Snapshot {
    pub fn capture(board: &Board, cursor: Position) -> Self {
        let tiles = Array2::from_shape_fn(board.dimensions(), |(row, col)| {
            Tile::of(board, Position::new(row, col))
        });
        Self { tiles, cursor }
    }

    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    pub fn cols(&self) -> usize {
        self.tiles.ncols()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn tile(&self, pos: Position) -> Tile {
        self.tiles[[pos.row, pos.col]]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = impl Iterator<Item = Tile> + '_> + '_ {
        self.tiles.rows().into_iter().map(|row| row.into_iter().copied())
    }
}
