//! Randomised mine placement that keeps the first opened cell safe.
//!
//! A layout is drawn uniformly and rejected until the cell under the cursor
//! (and, when there is room, its whole neighborhood) is free of mines. After
//! [`MAX_PLACEMENT_ATTEMPTS`] rejections the last layout is repaired by moving
//! each offending mine to a random empty cell outside the safe zone.

use crate::{Board, Content, Position};
use rand::seq::index;
use rand::Rng;

pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Cells that must stay mine-free for a given first move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafeZone {
    /// The cursor cell and every neighbor inside the grid.
    Neighborhood(Vec<Position>),
    /// Only the cursor cell; used when the neighborhood leaves too few cells.
    Cell(Position),
    /// Nothing can be kept safe.
    None,
}

impl SafeZone {
    pub fn for_cursor(board: &Board, cursor: Position, mines: usize) -> Self {
        let total = board.len();
        let mut neighborhood: Vec<Position> =
            cursor.neighbors(board.rows(), board.cols()).collect();
        neighborhood.push(cursor);

        if total - neighborhood.len() >= mines {
            SafeZone::Neighborhood(neighborhood)
        } else if total > mines {
            tracing::debug!(
                ?cursor,
                mines,
                total,
                "neighborhood too large to keep clear, only the cursor cell is kept safe"
            );
            SafeZone::Cell(cursor)
        } else {
            SafeZone::None
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        match self {
            SafeZone::Neighborhood(cells) => cells.contains(&pos),
            SafeZone::Cell(cell) => *cell == pos,
            SafeZone::None => false,
        }
    }

    fn is_satisfied_by(&self, board: &Board) -> bool {
        match self {
            SafeZone::Neighborhood(cells) => cells
                .iter()
                .all(|&pos| board.content(pos) == Content::Empty),
            SafeZone::Cell(cell) => board.content(*cell) == Content::Empty,
            SafeZone::None => true,
        }
    }
}

/// How a mine layout was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A random layout satisfied the safe zone on draw number `attempts`.
    Accepted { attempts: usize },
    /// Every draw was rejected; the last one was fixed up by moving mines.
    Repaired,
}

/// Replaces every mine on `board` with a fresh layout of `mines` mines that
/// keeps the cell at `cursor` safe.
pub fn place_mines<R: Rng + ?Sized>(
    board: &mut Board,
    cursor: Position,
    mines: usize,
    rng: &mut R,
) -> Placement {
    let mines = mines.min(board.len());
    let zone = SafeZone::for_cursor(board, cursor, mines);

    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        scatter(board, mines, rng);
        if zone.is_satisfied_by(board) {
            tracing::debug!(attempt, mines, ?cursor, "mine layout accepted");
            return Placement::Accepted { attempts: attempt };
        }
    }

    tracing::warn!(
        attempts = MAX_PLACEMENT_ATTEMPTS,
        "no safe mine layout drawn, relocating mines out of the safe zone"
    );
    repair(board, &zone, rng);
    Placement::Repaired
}

fn scatter<R: Rng + ?Sized>(board: &mut Board, mines: usize, rng: &mut R) {
    board.clear_mines();
    for i in index::sample(rng, board.len(), mines) {
        let pos = board.position_of(i);
        board.set_content(pos, Content::Mine);
    }
}

fn repair<R: Rng + ?Sized>(board: &mut Board, zone: &SafeZone, rng: &mut R) {
    let offending: Vec<Position> = board
        .mine_positions()
        .filter(|&pos| zone.contains(pos))
        .collect();

    for pos in offending {
        let candidates: Vec<Position> = board
            .positions()
            .filter(|&p| !zone.contains(p) && board.content(p) == Content::Empty)
            .collect();
        if candidates.is_empty() {
            break;
        }
        let target = candidates[rng.gen_range(0..candidates.len())];
        board.set_content(pos, Content::Empty);
        board.set_content(target, Content::Mine);
    }
}
