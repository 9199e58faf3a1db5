use crate::GameError;

pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_MINE_PERCENTAGE: u32 = 20;
pub const MAX_MINE_PERCENTAGE: u32 = 50;
/// Rows and columns are capped so every frame line and cursor offset fits
/// the terminal's 16-bit coordinates.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Parameters fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub mine_percentage: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            mine_percentage: DEFAULT_MINE_PERCENTAGE,
        }
    }
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, mine_percentage: u32) -> Result<Self, GameError> {
        let config = Self {
            rows,
            cols,
            mine_percentage,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.mine_percentage > MAX_MINE_PERCENTAGE {
            return Err(GameError::MinePercentageTooHigh {
                percentage: self.mine_percentage,
                max: MAX_MINE_PERCENTAGE,
            });
        }
        let too_large = GameError::BoardTooLarge {
            rows: self.rows,
            cols: self.cols,
            max: MAX_DIMENSION,
        };
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(too_large);
        }
        self.rows
            .checked_mul(self.cols)
            .and_then(|cells| cells.checked_mul(self.mine_percentage as usize))
            .map(|_| ())
            .ok_or(too_large)
    }

    /// `floor(rows * cols * percentage / 100)`, saturating on configs that
    /// would not pass [`GameConfig::validate`].
    pub fn mines_count(&self) -> usize {
        self.total_cells()
            .saturating_mul(self.mine_percentage as usize)
            / 100
    }

    pub fn total_cells(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }
}
