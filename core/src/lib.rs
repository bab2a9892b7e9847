//! Rule engine and state machine for a minesweeper game.
//!
//! [`Game`] is the entry point: it accepts the discrete commands a
//! presentation layer issues (new game, reveal, toggle flag, timer tick) and
//! exposes the result through [`Snapshot`]. Mines are placed on the first
//! reveal so the first move always opens a zone.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use snapshot::*;
pub use timer::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod game;
mod generator;
mod snapshot;
mod timer;
mod types;

/// Cells kept free of mines around the first move: the cell and its neighbors.
pub const SAFE_ZONE_CELLS: CellCount = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Validates the dimensions and that the mines leave room for the safe zone.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        let config = Self::new_unchecked(rows, cols, mines);
        if mines > 0 && mines.saturating_add(SAFE_ZONE_CELLS) >= config.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(config)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_count(self.rows, self.cols)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Easy => BoardConfig::new_unchecked(9, 9, 10),
            Self::Medium => BoardConfig::new_unchecked(16, 16, 40),
            Self::Hard => BoardConfig::new_unchecked(16, 30, 99),
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownDifficulty(s.to_owned()))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    /// Whether the board needs redrawing.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether the board needs redrawing.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}
