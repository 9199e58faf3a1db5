use crate::placement::place_mines;
use crate::{Board, CellState, GameConfig, GameError, Position, Snapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Open,
    Flag,
    Unknown,
}

impl Action {
    /// Maps a raw input byte to an action, ignoring ASCII case.
    pub fn from_byte(byte: u8) -> Self {
        match byte.to_ascii_lowercase() {
            b'w' => Action::MoveUp,
            b's' => Action::MoveDown,
            b'a' => Action::MoveLeft,
            b'd' => Action::MoveRight,
            b' ' => Action::Open,
            b'f' => Action::Flag,
            _ => Action::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Result of processing one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Stop(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

pub struct Game<R = StdRng> {
    board: Board,
    cursor: Position,
    mines_count: usize,
    first_move_done: bool,
    state: GameState,
    rng: R,
}

impl Game<StdRng> {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.rows, config.cols)?,
            cursor: Position::default(),
            mines_count: config.mines_count(),
            first_move_done: false,
            state: GameState::Playing,
            rng,
        })
    }

    /// Starts from a board whose mines are already laid out. No placement
    /// happens on the first open, so the layout is played as given.
    pub fn from_board(board: Board, rng: R) -> Self {
        let mut game = Self {
            mines_count: board.mines_count(),
            board,
            cursor: Position::default(),
            first_move_done: true,
            state: GameState::Playing,
            rng,
        };
        game.state = game.evaluate();
        game
    }

    pub fn perform(&mut self, action: Action) -> Step {
        if let Some(outcome) = self.outcome() {
            return Step::Stop(outcome);
        }

        tracing::trace!(?action, cursor = ?self.cursor, "processing action");
        let (rows, cols) = self.board.dimensions();
        match action {
            Action::MoveUp => self.cursor.row = self.cursor.row.saturating_sub(1),
            Action::MoveDown => self.cursor.row = (self.cursor.row + 1).min(rows - 1),
            Action::MoveLeft => self.cursor.col = self.cursor.col.saturating_sub(1),
            Action::MoveRight => self.cursor.col = (self.cursor.col + 1).min(cols - 1),
            Action::Open => self.open(),
            Action::Flag => self.toggle_flag(),
            Action::Unknown => {}
        }

        self.state = self.evaluate();
        match self.outcome() {
            Some(outcome) => {
                if outcome == Outcome::Won {
                    self.board.reveal_safe_cells();
                }
                tracing::info!(?outcome, "game over");
                Step::Stop(outcome)
            }
            None => Step::Continue,
        }
    }

    fn open(&mut self) {
        if !self.first_move_done {
            place_mines(&mut self.board, self.cursor, self.mines_count, &mut self.rng);
            self.first_move_done = true;
        }

        if self.board.state(self.cursor) != CellState::Closed {
            return;
        }
        self.board.set_state(self.cursor, CellState::Open);
        if self.board.cell(self.cursor).is_mine() {
            self.board.reveal_mines();
        }
    }

    fn toggle_flag(&mut self) {
        match self.board.state(self.cursor) {
            CellState::Closed => self.board.set_state(self.cursor, CellState::Flagged),
            CellState::Flagged => self.board.set_state(self.cursor, CellState::Closed),
            CellState::Open => {}
        }
    }

    /// A board without mines is won as soon as any cell is open.
    fn evaluate(&self) -> GameState {
        let board = &self.board;
        let any_open = board.closed_count() < board.len();
        if board.is_mine_open() {
            GameState::Lost
        } else if board.closed_count() == board.mines_count()
            || (board.mines_count() == 0 && any_open)
        {
            GameState::Won
        } else {
            GameState::Playing
        }
    }
}

impl<R> Game<R> {
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Playing => None,
            GameState::Won => Some(Outcome::Won),
            GameState::Lost => Some(Outcome::Lost),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.board.dimensions()
    }

    pub fn is_first_move_done(&self) -> bool {
        self.first_move_done
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.board, self.cursor)
    }
}
