use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
    #[error("Too many mines, the first move needs room for a safe zone")]
    TooManyMines,
    #[error("Unknown difficulty {0:?}, expected easy, medium or hard")]
    UnknownDifficulty(String),
    #[error("Mines were already placed on this board")]
    MinesAlreadyPlaced,
    #[error("Layout puts a mine next to the first move")]
    MineInSafeZone,
    #[error("Layout has {actual} mines but the board expects {expected}")]
    MineCountMismatch { expected: CellCount, actual: CellCount },
}

pub type Result<T> = core::result::Result<T, GameError>;
