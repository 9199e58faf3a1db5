pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod placement;
pub mod position;
pub mod render;
pub mod session;
pub mod snapshot;
pub mod terminal;

pub use board::{Board, Cell, CellState, Content};
pub use config::{GameConfig, MAX_MINE_PERCENTAGE};
pub use error::GameError;
pub use game::{Action, Game, GameState, Outcome, Step};
pub use position::Position;
pub use render::Renderer;
pub use session::SessionEnd;
pub use snapshot::{Snapshot, Tile};
pub use terminal::RawMode;
