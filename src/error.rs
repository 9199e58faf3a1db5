use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Board of {rows}x{cols} exceeds the largest supported board ({max}x{max})")]
    BoardTooLarge { rows: usize, cols: usize, max: usize },
    #[error("Mine percentage {percentage} is above the maximum of {max}")]
    MinePercentageTooHigh { percentage: u32, max: u32 },
}
